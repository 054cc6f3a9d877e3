//! Repository trait for recipe lookups.

use crate::domain::entities::RecipeSummary;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only recipe access.
///
/// Recipe authoring is out of scope for this service; the collection and
/// shopping-list operations only need existence checks and the compact
/// representation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Fetches the compact representation of a recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_summary(&self, recipe_id: i64) -> Result<Option<RecipeSummary>, AppError>;
}
