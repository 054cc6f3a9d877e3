#![allow(dead_code)]

use recipegram::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use url::Url;

pub const BASE_URL: &str = "https://recipegram.test";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::build(
        Arc::new(pool),
        Url::parse(BASE_URL).unwrap(),
        "test-signing-secret".to_string(),
        8,
        10,
    )
}

pub async fn create_test_user(pool: &PgPool, email: &str, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, username, first_name, last_name) \
         VALUES ($1, $2, 'Test', 'User') RETURNING id",
    )
    .bind(email)
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_recipe(pool: &PgPool, author_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO recipes (author_id, name, text, cooking_time) \
         VALUES ($1, $2, 'test recipe', 20) RETURNING id",
    )
    .bind(author_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_ingredient(pool: &PgPool, name: &str, unit: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO ingredients (name, measurement_unit) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(unit)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn add_recipe_ingredient(pool: &PgPool, recipe_id: i64, ingredient_id: i64, amount: i32) {
    sqlx::query("INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)")
        .bind(recipe_id)
        .bind(ingredient_id)
        .bind(amount)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn add_to_cart(pool: &PgPool, user_id: i64, recipe_id: i64) {
    sqlx::query("INSERT INTO cart_entries (user_id, recipe_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_short_link(pool: &PgPool, long_url: &str, short_url: &str) {
    sqlx::query("INSERT INTO short_links (long_url, short_url) VALUES ($1, $2)")
        .bind(long_url)
        .bind(short_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_short_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await
        .unwrap()
}
