mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use recipegram::api::handlers::{get_link_handler, redirect_handler};
use sqlx::PgPool;

fn app(pool: PgPool) -> Router {
    Router::new()
        .route("/sl/{token}", get(redirect_handler))
        .route("/api/recipes/{id}/get-link", get(get_link_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let server = TestServer::new(app(pool.clone())).unwrap();

    common::create_test_short_link(
        &pool,
        "https://recipegram.test/recipes/9",
        "https://recipegram.test/sl/abcd1234",
    )
    .await;

    let response = server.get("/sl/abcd1234").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://recipegram.test/recipes/9");
}

#[sqlx::test]
async fn test_redirect_round_trip(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let created = server.get("/api/recipes/42/get-link").await;
    let short_link = created.json::<serde_json::Value>()["short-link"]
        .as_str()
        .unwrap()
        .to_string();
    let token = short_link.rsplit('/').next().unwrap().to_string();

    let response = server.get(&format!("/sl/{token}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://recipegram.test/recipes/42"
    );
}

#[sqlx::test]
async fn test_redirect_unknown_token_is_not_found(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/sl/missing0").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_malformed_token_is_rejected(pool: PgPool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/sl/ab_cd!12").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_redirect_inactive_link_is_not_found(pool: PgPool) {
    let server = TestServer::new(app(pool.clone())).unwrap();

    common::create_test_short_link(
        &pool,
        "https://recipegram.test/recipes/9",
        "https://recipegram.test/sl/disabled",
    )
    .await;
    sqlx::query("UPDATE short_links SET is_active = FALSE WHERE short_url = $1")
        .bind("https://recipegram.test/sl/disabled")
        .execute(&pool)
        .await
        .unwrap();

    let response = server.get("/sl/disabled").await;

    response.assert_status_not_found();
}
