//! Repository trait for the shopping-list aggregation.

use crate::domain::entities::ShoppingListItem;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only aggregation over the user's shopping cart.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Returns `true` when the user has at least one cart entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn has_entries(&self, user_id: i64) -> Result<bool, AppError>;

    /// Grouped-sum aggregation over every ingredient line of every recipe
    /// in the user's cart.
    ///
    /// Grouping key is `(ingredient name, measurement unit)`; amounts are
    /// summed across recipes. Ordering is ascending by summed amount with
    /// the ingredient name as tie-break, so the result is deterministic
    /// for a fixed cart. An empty cart yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn aggregate_ingredients(&self, user_id: i64)
    -> Result<Vec<ShoppingListItem>, AppError>;
}
