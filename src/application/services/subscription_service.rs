//! Author subscription service.

use std::sync::Arc;

use crate::domain::entities::{SubscribedAuthor, User};
use crate::domain::repositories::{SubscriptionRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

/// Follow/unfollow semantics between users.
pub struct SubscriptionService<S: SubscriptionRepository, U: UserRepository> {
    subscriptions: Arc<S>,
    users: Arc<U>,
}

impl<S: SubscriptionRepository, U: UserRepository> SubscriptionService<S, U> {
    pub fn new(subscriptions: Arc<S>, users: Arc<U>) -> Self {
        Self {
            subscriptions,
            users,
        }
    }

    /// Subscribes `user_id` to `author_id` and returns the author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown author,
    /// [`AppError::Validation`] for a self-subscription or a duplicate.
    pub async fn subscribe(&self, user_id: i64, author_id: i64) -> Result<User, AppError> {
        let author = self.find_author(author_id).await?;

        if user_id == author_id {
            return Err(AppError::bad_request(
                "Cannot subscribe to yourself",
                json!({ "author_id": author_id }),
            ));
        }

        if !self.subscriptions.add(user_id, author_id).await? {
            return Err(AppError::bad_request(
                "Already subscribed to this author",
                json!({ "author_id": author_id }),
            ));
        }

        Ok(author)
    }

    /// Removes a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown author and
    /// [`AppError::Validation`] when no subscription existed.
    pub async fn unsubscribe(&self, user_id: i64, author_id: i64) -> Result<(), AppError> {
        self.find_author(author_id).await?;

        if !self.subscriptions.remove(user_id, author_id).await? {
            return Err(AppError::bad_request(
                "Not subscribed to this author",
                json!({ "author_id": author_id }),
            ));
        }

        Ok(())
    }

    /// Pages through the authors `user_id` follows; returns the page and
    /// the total subscription count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<SubscribedAuthor>, i64), AppError> {
        let authors = self.subscriptions.list(user_id, limit, offset).await?;
        let total = self.subscriptions.count(user_id).await?;

        Ok((authors, total))
    }

    async fn find_author(&self, author_id: i64) -> Result<User, AppError> {
        self.users.find_by_id(author_id).await?.ok_or_else(|| {
            AppError::not_found("Author not found", json!({ "author_id": author_id }))
        })
    }
}
