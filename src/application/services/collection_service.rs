//! Generic add/remove service for per-user recipe collections.

use std::sync::Arc;

use crate::domain::entities::RecipeSummary;
use crate::domain::repositories::{RecipeCollectionRepository, RecipeRepository};
use crate::error::AppError;
use serde_json::json;

/// Add/remove logic shared by the shopping cart and the favorites list.
///
/// Both collections are join tables with a unique `(user, recipe)`
/// constraint and identical error semantics, so one service instance per
/// collection is enough; `kind` only feeds the error messages.
pub struct CollectionService<C: RecipeCollectionRepository, R: RecipeRepository> {
    collection: Arc<C>,
    recipes: Arc<R>,
    kind: &'static str,
}

impl<C: RecipeCollectionRepository, R: RecipeRepository> CollectionService<C, R> {
    pub fn new(collection: Arc<C>, recipes: Arc<R>, kind: &'static str) -> Self {
        Self {
            collection,
            recipes,
            kind,
        }
    }

    /// Adds a recipe to the user's collection and returns its compact
    /// representation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown recipe and
    /// [`AppError::Validation`] when the recipe is already in the
    /// collection.
    pub async fn add(&self, user_id: i64, recipe_id: i64) -> Result<RecipeSummary, AppError> {
        let recipe = self.find_recipe(recipe_id).await?;

        if !self.collection.add(user_id, recipe_id).await? {
            return Err(AppError::bad_request(
                format!("Recipe is already in the {}", self.kind),
                json!({ "recipe_id": recipe_id }),
            ));
        }

        Ok(recipe)
    }

    /// Removes a recipe from the user's collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown recipe and
    /// [`AppError::Validation`] when the recipe was not in the
    /// collection.
    pub async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<(), AppError> {
        self.find_recipe(recipe_id).await?;

        if !self.collection.remove(user_id, recipe_id).await? {
            return Err(AppError::bad_request(
                format!("Recipe is not in the {}", self.kind),
                json!({ "recipe_id": recipe_id }),
            ));
        }

        Ok(())
    }

    async fn find_recipe(&self, recipe_id: i64) -> Result<RecipeSummary, AppError> {
        self.recipes
            .find_summary(recipe_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Recipe not found", json!({ "recipe_id": recipe_id }))
            })
    }
}
