//! Derivation of the canonical long URL from the get-link request path.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Index of the `api` segment in a `/api/recipes/{id}/get-link` path.
const API_SEGMENT_POS: usize = 1;

/// Derives the long URL a short link should point at from the request
/// path of the get-link endpoint.
///
/// `/api/recipes/{id}/get-link` becomes `{base}/recipes/{id}`: the `api`
/// prefix and the trailing `get-link` segment are stripped, the remainder
/// is resolved against the configured base URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the path does not have the
/// expected shape.
pub fn long_url_from_request(base_url: &Url, path: &str) -> Result<String, AppError> {
    let mut segments: Vec<&str> = path.split('/').collect();

    let shape_ok = segments.first() == Some(&"")
        && segments.get(API_SEGMENT_POS) == Some(&"api")
        && segments.last() == Some(&"get-link")
        && segments.len() > 3;

    if !shape_ok {
        return Err(AppError::bad_request(
            "Request path has an unexpected shape for a short-link request",
            json!({ "path": path }),
        ));
    }

    segments.pop();
    segments.remove(API_SEGMENT_POS);

    let mut long_url = base_url.clone();
    long_url.set_path(&segments.join("/"));
    long_url.set_query(None);

    Ok(long_url.to_string())
}
