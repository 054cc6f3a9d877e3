//! Repository trait for user lookups and provisioning.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, AppError>;

    /// Fetches a user by email. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Creates a user. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email or username is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        email: &str,
        username: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AppError>;
}
