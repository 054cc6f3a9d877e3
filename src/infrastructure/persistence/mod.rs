//! PostgreSQL repository implementations.

mod pg_cart_repository;
mod pg_favorite_repository;
mod pg_recipe_repository;
mod pg_short_link_repository;
mod pg_subscription_repository;
mod pg_token_repository;
mod pg_user_repository;

pub use pg_cart_repository::PgCartRepository;
pub use pg_favorite_repository::PgFavoriteRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
pub use pg_subscription_repository::PgSubscriptionRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
