//! HTTP request handlers.

mod favorites;
mod health;
mod redirect;
mod shopping_cart;
mod short_links;
mod subscriptions;

pub use favorites::{add_favorite_handler, remove_favorite_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shopping_cart::{
    add_to_cart_handler, download_shopping_cart_handler, remove_from_cart_handler,
};
pub use short_links::get_link_handler;
pub use subscriptions::{subscribe_handler, subscriptions_list_handler, unsubscribe_handler};
