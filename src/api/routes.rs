//! API route configuration.
//!
//! Everything here requires Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    add_favorite_handler, add_to_cart_handler, download_shopping_cart_handler,
    remove_favorite_handler, remove_from_cart_handler, subscribe_handler,
    subscriptions_list_handler, unsubscribe_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Authenticated API routes.
///
/// # Endpoints
///
/// - `POST   /recipes/{id}/shopping_cart`       - add a recipe to the cart
/// - `DELETE /recipes/{id}/shopping_cart`       - remove it
/// - `GET    /recipes/download_shopping_cart`   - aggregated shopping list
/// - `POST   /recipes/{id}/favorite`            - favorite a recipe
/// - `DELETE /recipes/{id}/favorite`            - unfavorite it
/// - `POST   /users/{id}/subscribe`             - follow an author
/// - `DELETE /users/{id}/subscribe`             - unfollow
/// - `GET    /users/subscriptions`              - list followed authors
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes/download_shopping_cart",
            get(download_shopping_cart_handler),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(add_to_cart_handler).delete(remove_from_cart_handler),
        )
        .route(
            "/recipes/{id}/favorite",
            post(add_favorite_handler).delete(remove_favorite_handler),
        )
        .route("/users/subscriptions", get(subscriptions_list_handler))
        .route(
            "/users/{id}/subscribe",
            post(subscribe_handler).delete(unsubscribe_handler),
        )
}
