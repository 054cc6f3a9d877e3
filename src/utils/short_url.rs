//! Short URL construction and long URL validation.

use thiserror::Error;
use url::Url;

/// Path segment marking short-link routes, as in
/// `https://host/sl/{token}`.
pub const SHORT_LINK_PATH_MARKER: &str = "sl";

/// Why a long URL was rejected.
#[derive(Debug, Error)]
pub enum LongUrlError {
    #[error("URL is not parseable: {0}")]
    Unparseable(#[from] url::ParseError),
    #[error("URL must be absolute with an http or https scheme")]
    UnsupportedScheme,
}

/// Parses and validates a long URL.
///
/// Only absolute http/https URLs with a host are accepted; anything else
/// is rejected before the store is touched.
///
/// # Errors
///
/// Returns [`LongUrlError`] for malformed input.
pub fn parse_long_url(long_url: &str) -> Result<Url, LongUrlError> {
    let parsed = Url::parse(long_url)?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(LongUrlError::UnsupportedScheme);
    }

    Ok(parsed)
}

/// Builds the short URL for `token` on the same origin as `origin`.
///
/// The prefix is the origin's `scheme://host[:port]` followed by the
/// short-link path marker.
pub fn short_url_for(origin: &Url, token: &str) -> String {
    format!(
        "{}/{}/{}",
        origin.origin().ascii_serialization(),
        SHORT_LINK_PATH_MARKER,
        token
    )
}
