//! Application services.

mod auth_service;
mod collection_service;
mod shopping_list_service;
mod short_link_service;
mod subscription_service;

pub use auth_service::AuthService;
pub use collection_service::CollectionService;
pub use shopping_list_service::{ShoppingListService, render_document};
pub use short_link_service::ShortLinkService;
pub use subscription_service::SubscriptionService;
