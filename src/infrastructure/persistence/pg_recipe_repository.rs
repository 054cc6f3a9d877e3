//! PostgreSQL implementation of recipe lookups.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::RecipeSummary;
use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct RecipeSummaryRow {
    id: i64,
    name: String,
    cooking_time: i32,
}

pub struct PgRecipeRepository {
    pool: Arc<PgPool>,
}

impl PgRecipeRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn find_summary(&self, recipe_id: i64) -> Result<Option<RecipeSummary>, AppError> {
        let row = sqlx::query_as::<_, RecipeSummaryRow>(
            "SELECT id, name, cooking_time FROM recipes WHERE id = $1",
        )
        .bind(recipe_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| RecipeSummary {
            id: r.id,
            name: r.name,
            cooking_time: r.cooking_time,
        }))
    }
}
