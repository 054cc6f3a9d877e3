//! Handler for the per-recipe short link endpoint.

use axum::{Json, extract::State, http::Uri};
use tracing::debug;

use crate::api::dto::short_link::ShortLinkResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_url::long_url_from_request;

/// Returns a short link for the recipe page the request points at.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}/get-link`
///
/// The long URL is derived from the request path itself: stripping the
/// `api` and `get-link` segments of `/api/recipes/{id}/get-link` yields
/// the public recipe URL on the configured base origin. Creation is
/// idempotent; repeated calls return the same short link.
///
/// # Errors
///
/// Returns 400 Bad Request when the request path does not have the
/// expected shape or the derived URL is malformed.
pub async fn get_link_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let long_url = long_url_from_request(&state.base_url, uri.path())?;

    let (link, is_new) = state.short_link_service.create_or_get(&long_url).await?;
    debug!(%long_url, short_url = %link.short_url, is_new, "short link served");

    Ok(Json(ShortLinkResponse::from(link)))
}
