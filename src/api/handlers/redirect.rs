//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::short_url_for;

/// Shape of a well-formed short link token.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,64}$").expect("valid regex"));

/// Redirects a short link token to its stored long URL.
///
/// # Endpoint
///
/// `GET /sl/{token}`
///
/// The token shape is validated before the store is touched; the full
/// short URL is then rebuilt on the configured base origin and resolved.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed token and 404 Not Found when
/// no active link matches. Resolution failure is an explicit error
/// response, never a 200 with an error body.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    if !TOKEN_REGEX.is_match(&token) {
        return Err(AppError::bad_request(
            "Malformed short link token",
            serde_json::json!({ "token": token }),
        ));
    }

    let short_url = short_url_for(&state.base_url, &token);
    let link = state.short_link_service.resolve(&short_url).await?;

    metrics::counter!("redirects_served_total").increment(1);
    debug!(%short_url, long_url = %link.long_url, "redirecting");

    Ok(Redirect::temporary(&link.long_url))
}
