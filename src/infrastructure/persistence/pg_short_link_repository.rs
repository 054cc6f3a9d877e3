//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{ShortLinkInsert, ShortLinkRepository};
use crate::error::AppError;
use crate::utils::db_error::unique_violation_constraint;

const LONG_URL_CONSTRAINT: &str = "short_links_long_url_key";
const SHORT_URL_CONSTRAINT: &str = "short_links_short_url_key";

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    long_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.long_url,
            row.short_url,
            row.created_at,
            row.is_active,
        )
    }
}

/// PostgreSQL repository for short links.
///
/// Relies on the two unique constraints of the `short_links` table to
/// make get-or-create safe under concurrency; the violated constraint
/// name is mapped back into [`ShortLinkInsert`] for the service to act
/// on.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLinkInsert, AppError> {
        let result = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (long_url, short_url)
            VALUES ($1, $2)
            RETURNING id, long_url, short_url, created_at, is_active
            "#,
        )
        .bind(&new_link.long_url)
        .bind(&new_link.short_url)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(ShortLinkInsert::Created(row.into())),
            Err(e) => match unique_violation_constraint(&e) {
                Some(LONG_URL_CONSTRAINT) => Ok(ShortLinkInsert::DuplicateLongUrl),
                Some(SHORT_URL_CONSTRAINT) => Ok(ShortLinkInsert::DuplicateShortUrl),
                _ => Err(e.into()),
            },
        }
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, long_url, short_url, created_at, is_active
            FROM short_links
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, long_url, short_url, created_at, is_active
            FROM short_links
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }
}
