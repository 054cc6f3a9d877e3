//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                       - health check (public)
//! - `GET /sl/{token}`                   - short link redirect (public)
//! - `GET /api/recipes/{id}/get-link`    - short link for a recipe (public)
//! - `/api/*`                            - authenticated API (Bearer token)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Rate limiting** - per-IP token bucket, stricter on the API
//! - **Authentication** - Bearer token for `/api` (except get-link)
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::handlers::{get_link_handler, health_handler, redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let public = Router::new()
        .route("/sl/{token}", get(redirect_handler))
        .route("/api/recipes/{id}/get-link", get(get_link_handler))
        .layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(public)
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
