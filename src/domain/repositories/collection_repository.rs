//! Repository trait shared by the per-user recipe collections.

use crate::error::AppError;
use async_trait::async_trait;

/// A per-user set of recipes backed by a join table with a unique
/// `(user, recipe)` constraint. Implemented by both the shopping cart and
/// the favorites repositories; the service layer is generic over this
/// trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCollectionRepository: Send + Sync {
    /// Adds a recipe to the user's collection.
    ///
    /// Returns `false` if the `(user, recipe)` pair already exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;

    /// Removes a recipe from the user's collection.
    ///
    /// Returns `false` if no matching entry existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;
}
