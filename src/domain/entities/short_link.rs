//! Short link entity mapping a long URL to a generated short URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// For a given `long_url` at most one row exists; `short_url` is unique
/// across all rows. Rows are never hard-deleted; `is_active` is the
/// soft-disable flag.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl ShortLink {
    pub fn new(
        id: i64,
        long_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            long_url,
            short_url,
            created_at,
            is_active,
        }
    }

    /// The random token part of the short URL (everything after the last `/`).
    pub fn token(&self) -> &str {
        self.short_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.short_url)
    }
}

/// Input data for inserting a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub long_url: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "https://recipegram.test/recipes/7".to_string(),
            "https://recipegram.test/sl/Ab3xYz90".to_string(),
            now,
            true,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.created_at, now);
        assert!(link.is_active);
    }

    #[test]
    fn test_token_is_last_path_segment() {
        let link = ShortLink::new(
            1,
            "https://recipegram.test/recipes/7".to_string(),
            "https://recipegram.test/sl/Ab3xYz90".to_string(),
            Utc::now(),
            true,
        );

        assert_eq!(link.token(), "Ab3xYz90");
    }
}
