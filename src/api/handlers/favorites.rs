//! Handlers for the favorites collection.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::collection::RecipeSummaryResponse;
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a recipe to the current user's favorites.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/favorite`
///
/// # Errors
///
/// Returns 404 for an unknown recipe and 400 when the recipe is already
/// favorited.
pub async fn add_favorite_handler(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<(StatusCode, Json<RecipeSummaryResponse>), AppError> {
    let recipe = state.favorite_service.add(current.id, recipe_id).await?;

    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// Removes a recipe from the current user's favorites.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/favorite`
pub async fn remove_favorite_handler(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state.favorite_service.remove(current.id, recipe_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
