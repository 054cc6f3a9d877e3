//! DTO for the short link endpoint.

use crate::domain::entities::ShortLink;
use serde::Serialize;

/// Response body of the get-link endpoint.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    #[serde(rename = "short-link")]
    pub short_link: String,
}

impl From<ShortLink> for ShortLinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_link: link.short_url,
        }
    }
}
