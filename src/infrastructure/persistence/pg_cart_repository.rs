//! PostgreSQL implementation of the shopping cart.
//!
//! Implements both the collection trait (add/remove entries) and the
//! shopping-list trait (grouped-sum aggregation over the cart).

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShoppingListItem;
use crate::domain::repositories::{RecipeCollectionRepository, ShoppingListRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ShoppingListRow {
    name: String,
    measurement_unit: String,
    total_amount: i64,
}

pub struct PgCartRepository {
    pool: Arc<PgPool>,
}

impl PgCartRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeCollectionRepository for PgCartRepository {
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO cart_entries (user_id, recipe_id)
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
            DELETE FROM cart_entries
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

#[async_trait]
impl ShoppingListRepository for PgCartRepository {
    async fn has_entries(&self, user_id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM cart_entries WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn aggregate_ingredients(
        &self,
        user_id: i64,
    ) -> Result<Vec<ShoppingListItem>, AppError> {
        // Ascending by summed amount, name as tie-break: deterministic
        // for a fixed cart.
        let rows = sqlx::query_as::<_, ShoppingListRow>(
            r#"
            SELECT i.name, i.measurement_unit, SUM(ri.amount)::BIGINT AS total_amount
            FROM cart_entries c
            JOIN recipe_ingredients ri ON ri.recipe_id = c.recipe_id
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE c.user_id = $1
            GROUP BY i.name, i.measurement_unit
            ORDER BY total_amount, i.name
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ShoppingListItem::new(row.name, row.measurement_unit, row.total_amount))
            .collect())
    }
}
