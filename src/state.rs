//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;
use url::Url;

use crate::application::services::{
    AuthService, CollectionService, ShoppingListService, ShortLinkService, SubscriptionService,
};
use crate::infrastructure::persistence::{
    PgCartRepository, PgFavoriteRepository, PgRecipeRepository, PgShortLinkRepository,
    PgSubscriptionRepository, PgTokenRepository, PgUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    /// Public origin of the service; short links and derived long URLs
    /// are built against it.
    pub base_url: Url,
    pub short_link_service: Arc<ShortLinkService<PgShortLinkRepository>>,
    pub shopping_list_service: Arc<ShoppingListService<PgCartRepository>>,
    pub cart_service: Arc<CollectionService<PgCartRepository, PgRecipeRepository>>,
    pub favorite_service: Arc<CollectionService<PgFavoriteRepository, PgRecipeRepository>>,
    pub subscription_service: Arc<SubscriptionService<PgSubscriptionRepository, PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn build(
        pool: Arc<PgPool>,
        base_url: Url,
        token_signing_secret: String,
        short_link_token_length: usize,
        short_link_max_attempts: usize,
    ) -> Self {
        let short_link_repo = Arc::new(PgShortLinkRepository::new(pool.clone()));
        let cart_repo = Arc::new(PgCartRepository::new(pool.clone()));
        let favorite_repo = Arc::new(PgFavoriteRepository::new(pool.clone()));
        let recipe_repo = Arc::new(PgRecipeRepository::new(pool.clone()));
        let subscription_repo = Arc::new(PgSubscriptionRepository::new(pool.clone()));
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));

        Self {
            db: pool,
            base_url,
            short_link_service: Arc::new(ShortLinkService::new(
                short_link_repo,
                short_link_token_length,
                short_link_max_attempts,
            )),
            shopping_list_service: Arc::new(ShoppingListService::new(cart_repo.clone())),
            cart_service: Arc::new(CollectionService::new(
                cart_repo,
                recipe_repo.clone(),
                "shopping cart",
            )),
            favorite_service: Arc::new(CollectionService::new(
                favorite_repo,
                recipe_repo,
                "favorites",
            )),
            subscription_service: Arc::new(SubscriptionService::new(subscription_repo, user_repo)),
            auth_service: Arc::new(AuthService::new(token_repo, token_signing_secret)),
        }
    }
}
