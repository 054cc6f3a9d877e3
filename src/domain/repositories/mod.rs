//! Repository traits for data access.
//!
//! Each trait is implemented by a PostgreSQL repository in
//! [`crate::infrastructure::persistence`] and mocked with `mockall` in
//! unit tests.

mod collection_repository;
mod recipe_repository;
mod short_link_repository;
mod shopping_list_repository;
mod subscription_repository;
mod token_repository;
mod user_repository;

pub use collection_repository::RecipeCollectionRepository;
pub use recipe_repository::RecipeRepository;
pub use short_link_repository::{ShortLinkInsert, ShortLinkRepository};
pub use shopping_list_repository::ShoppingListRepository;
pub use subscription_repository::SubscriptionRepository;
pub use token_repository::TokenRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use collection_repository::MockRecipeCollectionRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use shopping_list_repository::MockShoppingListRepository;
#[cfg(test)]
pub use subscription_repository::MockSubscriptionRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
