//! Handlers for the shopping cart and the shopping list download.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::collection::RecipeSummaryResponse;
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a recipe to the current user's shopping cart.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/shopping_cart`
///
/// # Errors
///
/// Returns 404 for an unknown recipe and 400 when the recipe is already
/// in the cart.
pub async fn add_to_cart_handler(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<(StatusCode, Json<RecipeSummaryResponse>), AppError> {
    let recipe = state.cart_service.add(current.id, recipe_id).await?;

    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// Removes a recipe from the current user's shopping cart.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/shopping_cart`
///
/// # Errors
///
/// Returns 404 for an unknown recipe and 400 when the recipe was not in
/// the cart.
pub async fn remove_from_cart_handler(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state.cart_service.remove(current.id, recipe_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Downloads the aggregated shopping list as a plain-text attachment.
///
/// # Endpoint
///
/// `GET /api/recipes/download_shopping_cart`
///
/// Ingredient lines of every recipe in the cart are grouped by
/// `(name, unit)` and summed. An empty cart answers 404 with a plain
/// message rather than an empty document.
pub async fn download_shopping_cart_handler(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    let Some(document) = state.shopping_list_service.render(current.id).await? else {
        return Ok((StatusCode::NOT_FOUND, "Shopping cart is empty.").into_response());
    };

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=shopping_list.txt",
        ),
    ];

    Ok((headers, document).into_response())
}
