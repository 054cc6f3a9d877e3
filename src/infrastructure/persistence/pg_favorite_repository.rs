//! PostgreSQL implementation of the favorites collection.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::RecipeCollectionRepository;
use crate::error::AppError;

pub struct PgFavoriteRepository {
    pool: Arc<PgPool>,
}

impl PgFavoriteRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeCollectionRepository for PgFavoriteRepository {
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO favorites (user_id, recipe_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE user_id = $1 AND recipe_id = $2
            "#,
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
