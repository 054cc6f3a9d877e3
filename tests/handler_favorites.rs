mod common;

use axum::{Extension, Router, routing::post};
use axum_test::TestServer;
use recipegram::api::handlers::{add_favorite_handler, remove_favorite_handler};
use recipegram::domain::entities::CurrentUser;
use sqlx::PgPool;

fn app(pool: PgPool, user_id: i64) -> Router {
    Router::new()
        .route(
            "/api/recipes/{id}/favorite",
            post(add_favorite_handler).delete(remove_favorite_handler),
        )
        .layer(Extension(CurrentUser { id: user_id }))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_add_favorite_success(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "cook@recipegram.test", "cook").await;
    let recipe_id = common::create_test_recipe(&pool, user_id, "Borscht").await;

    let server = TestServer::new(app(pool.clone(), user_id)).unwrap();

    let response = server.post(&format!("/api/recipes/{recipe_id}/favorite")).await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.json::<serde_json::Value>()["name"], "Borscht");

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_add_favorite_twice_is_rejected(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "cook@recipegram.test", "cook").await;
    let recipe_id = common::create_test_recipe(&pool, user_id, "Borscht").await;

    let server = TestServer::new(app(pool, user_id)).unwrap();

    server
        .post(&format!("/api/recipes/{recipe_id}/favorite"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.post(&format!("/api/recipes/{recipe_id}/favorite")).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_favorites_and_cart_are_independent(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "cook@recipegram.test", "cook").await;
    let recipe_id = common::create_test_recipe(&pool, user_id, "Borscht").await;
    common::add_to_cart(&pool, user_id, recipe_id).await;

    let server = TestServer::new(app(pool, user_id)).unwrap();

    // Already in the cart, still addable to favorites.
    let response = server.post(&format!("/api/recipes/{recipe_id}/favorite")).await;

    assert_eq!(response.status_code(), 201);
}

#[sqlx::test]
async fn test_remove_favorite(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "cook@recipegram.test", "cook").await;
    let recipe_id = common::create_test_recipe(&pool, user_id, "Borscht").await;

    let server = TestServer::new(app(pool, user_id)).unwrap();

    server
        .post(&format!("/api/recipes/{recipe_id}/favorite"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.delete(&format!("/api/recipes/{recipe_id}/favorite")).await;

    assert_eq!(response.status_code(), 204);
}

#[sqlx::test]
async fn test_remove_absent_favorite_is_rejected(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "cook@recipegram.test", "cook").await;
    let recipe_id = common::create_test_recipe(&pool, user_id, "Borscht").await;

    let server = TestServer::new(app(pool, user_id)).unwrap();

    let response = server.delete(&format!("/api/recipes/{recipe_id}/favorite")).await;

    response.assert_status_bad_request();
}
