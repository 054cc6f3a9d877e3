//! Handlers for author subscriptions.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::subscription::{SubscribeResponse, SubscriptionListResponse};
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Subscribes the current user to an author.
///
/// # Endpoint
///
/// `POST /api/users/{id}/subscribe`
///
/// # Errors
///
/// Returns 404 for an unknown author, 400 for a self-subscription or a
/// duplicate.
pub async fn subscribe_handler(
    Path(author_id): Path<i64>,
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<(StatusCode, Json<SubscribeResponse>), AppError> {
    let author = state
        .subscription_service
        .subscribe(current.id, author_id)
        .await?;

    Ok((StatusCode::CREATED, Json(author.into())))
}

/// Removes a subscription.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}/subscribe`
pub async fn unsubscribe_handler(
    Path(author_id): Path<i64>,
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state
        .subscription_service
        .unsubscribe(current.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists the authors the current user follows.
///
/// # Endpoint
///
/// `GET /api/users/subscriptions?limit=..&offset=..`
pub async fn subscriptions_list_handler(
    Query(pagination): Query<PaginationParams>,
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<SubscriptionListResponse>, AppError> {
    pagination.validate()?;
    let (limit, offset) = pagination.limit_offset();

    let (authors, count) = state
        .subscription_service
        .list(current.id, limit, offset)
        .await?;

    Ok(Json(SubscriptionListResponse {
        count,
        results: authors.into_iter().map(Into::into).collect(),
    }))
}
