//! Repository trait for author subscriptions.

use crate::domain::entities::SubscribedAuthor;
use crate::error::AppError;
use async_trait::async_trait;

/// Follower/author join rows with a unique `(user, author)` constraint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Subscribes `user_id` to `author_id`.
    ///
    /// Returns `false` if the subscription already exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add(&self, user_id: i64, author_id: i64) -> Result<bool, AppError>;

    /// Removes a subscription.
    ///
    /// Returns `false` if no matching subscription existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove(&self, user_id: i64, author_id: i64) -> Result<bool, AppError>;

    /// Lists the authors `user_id` follows, with their recipe counts,
    /// ordered by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SubscribedAuthor>, AppError>;

    /// Total number of subscriptions held by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, user_id: i64) -> Result<i64, AppError>;
}
