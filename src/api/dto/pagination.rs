//! Limit/offset pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

const DEFAULT_LIMIT: i64 = 25;
const MAX_LIMIT: i64 = 100;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse the values from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "limit must be positive"))]
    pub limit: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0, message = "offset cannot be negative"))]
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Resolves the parameters to an effective `(limit, offset)` pair,
    /// applying the default and the cap.
    pub fn limit_offset(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = self.offset.unwrap_or(0);
        (limit, offset)
    }
}
