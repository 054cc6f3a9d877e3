mod common;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use axum_test::TestServer;
use recipegram::api::handlers::{
    subscribe_handler, subscriptions_list_handler, unsubscribe_handler,
};
use recipegram::domain::entities::CurrentUser;
use sqlx::PgPool;

fn app(pool: PgPool, user_id: i64) -> Router {
    Router::new()
        .route("/api/users/subscriptions", get(subscriptions_list_handler))
        .route(
            "/api/users/{id}/subscribe",
            post(subscribe_handler).delete(unsubscribe_handler),
        )
        .layer(Extension(CurrentUser { id: user_id }))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_subscribe_success(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;
    let author = common::create_test_user(&pool, "author@recipegram.test", "author").await;

    let server = TestServer::new(app(pool, follower)).unwrap();

    let response = server.post(&format!("/api/users/{author}/subscribe")).await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["username"], "author");
    assert_eq!(json["email"], "author@recipegram.test");
}

#[sqlx::test]
async fn test_subscribe_to_self_is_rejected(pool: PgPool) {
    let user = common::create_test_user(&pool, "solo@recipegram.test", "solo").await;

    let server = TestServer::new(app(pool, user)).unwrap();

    let response = server.post(&format!("/api/users/{user}/subscribe")).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_subscribe_twice_is_rejected(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;
    let author = common::create_test_user(&pool, "author@recipegram.test", "author").await;

    let server = TestServer::new(app(pool, follower)).unwrap();

    server
        .post(&format!("/api/users/{author}/subscribe"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.post(&format!("/api/users/{author}/subscribe")).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_subscribe_unknown_author_is_not_found(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;

    let server = TestServer::new(app(pool, follower)).unwrap();

    let response = server.post("/api/users/999/subscribe").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_unsubscribe(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;
    let author = common::create_test_user(&pool, "author@recipegram.test", "author").await;

    let server = TestServer::new(app(pool, follower)).unwrap();

    server
        .post(&format!("/api/users/{author}/subscribe"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.delete(&format!("/api/users/{author}/subscribe")).await;

    assert_eq!(response.status_code(), 204);
}

#[sqlx::test]
async fn test_unsubscribe_without_subscription_is_rejected(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;
    let author = common::create_test_user(&pool, "author@recipegram.test", "author").await;

    let server = TestServer::new(app(pool, follower)).unwrap();

    let response = server.delete(&format!("/api/users/{author}/subscribe")).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_list_subscriptions_with_recipe_counts(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;
    let author = common::create_test_user(&pool, "author@recipegram.test", "author").await;
    common::create_test_recipe(&pool, author, "Recipe 1").await;
    common::create_test_recipe(&pool, author, "Recipe 2").await;

    let server = TestServer::new(app(pool, follower)).unwrap();

    server
        .post(&format!("/api/users/{author}/subscribe"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/api/users/subscriptions").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 1);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["username"], "author");
    assert_eq!(results[0]["recipes_count"], 2);
}

#[sqlx::test]
async fn test_list_subscriptions_pagination(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;

    for i in 0..3 {
        let author = common::create_test_user(
            &pool,
            &format!("author{i}@recipegram.test"),
            &format!("author{i}"),
        )
        .await;
        sqlx::query("INSERT INTO subscriptions (user_id, author_id) VALUES ($1, $2)")
            .bind(follower)
            .bind(author)
            .execute(&pool)
            .await
            .unwrap();
    }

    let server = TestServer::new(app(pool, follower)).unwrap();

    let response = server
        .get("/api/users/subscriptions")
        .add_query_param("limit", "2")
        .add_query_param("offset", "1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 3);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    // Ordered by username; offset 1 skips author0.
    assert_eq!(results[0]["username"], "author1");
    assert_eq!(results[1]["username"], "author2");
}

#[sqlx::test]
async fn test_list_subscriptions_rejects_invalid_pagination(pool: PgPool) {
    let follower = common::create_test_user(&pool, "follower@recipegram.test", "follower").await;

    let server = TestServer::new(app(pool, follower)).unwrap();

    let response = server
        .get("/api/users/subscriptions")
        .add_query_param("limit", "0")
        .await;

    response.assert_status_bad_request();
}
