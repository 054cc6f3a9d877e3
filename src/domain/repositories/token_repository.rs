//! Repository trait for API token storage.

use crate::error::AppError;
use async_trait::async_trait;

/// API token persistence.
///
/// Tokens are stored only as HMAC-SHA256 hashes; the raw value exists
/// solely in the creating admin's terminal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Resolves a token hash to the owning user id.
    ///
    /// Revoked tokens do not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_user_by_hash(&self, token_hash: &str) -> Result<Option<i64>, AppError>;

    /// Refreshes `last_used_at` for a token. Best-effort from the
    /// caller's perspective.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn touch_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Stores a new token hash for a user. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the hash already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user_id: i64, name: &str, token_hash: &str) -> Result<i64, AppError>;

    /// Revokes every token with the given name.
    ///
    /// Returns the number of tokens revoked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke_by_name(&self, name: &str) -> Result<u64, AppError>;
}
