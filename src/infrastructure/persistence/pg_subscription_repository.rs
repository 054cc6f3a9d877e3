//! PostgreSQL implementation of author subscriptions.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::SubscribedAuthor;
use crate::domain::repositories::SubscriptionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SubscribedAuthorRow {
    id: i64,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    recipes_count: i64,
}

pub struct PgSubscriptionRepository {
    pool: Arc<PgPool>,
}

impl PgSubscriptionRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    async fn add(&self, user_id: i64, author_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO subscriptions (user_id, author_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(author_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove(&self, user_id: i64, author_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM subscriptions
            WHERE user_id = $1 AND author_id = $2
            "#,
        )
        .bind(user_id)
        .bind(author_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn list(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SubscribedAuthor>, AppError> {
        let rows = sqlx::query_as::<_, SubscribedAuthorRow>(
            r#"
            SELECT
                u.id, u.email, u.username, u.first_name, u.last_name,
                (SELECT COUNT(*) FROM recipes r WHERE r.author_id = u.id) AS recipes_count
            FROM subscriptions s
            JOIN users u ON u.id = s.author_id
            WHERE s.user_id = $1
            ORDER BY u.username
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| SubscribedAuthor {
                id: r.id,
                email: r.email,
                username: r.username,
                first_name: r.first_name,
                last_name: r.last_name,
                recipes_count: r.recipes_count,
            })
            .collect())
    }

    async fn count(&self, user_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM subscriptions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
