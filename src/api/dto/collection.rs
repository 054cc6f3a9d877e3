//! DTOs for the cart and favorites endpoints.

use crate::domain::entities::RecipeSummary;
use serde::Serialize;

/// Compact recipe representation returned after adding a recipe to a
/// collection.
#[derive(Debug, Serialize)]
pub struct RecipeSummaryResponse {
    pub id: i64,
    pub name: String,
    pub cooking_time: i32,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(recipe: RecipeSummary) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            cooking_time: recipe.cooking_time,
        }
    }
}
