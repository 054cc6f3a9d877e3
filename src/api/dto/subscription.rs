//! DTOs for the subscription endpoints.

use crate::domain::entities::{SubscribedAuthor, User};
use serde::Serialize;

/// Author representation returned on subscribe.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for SubscribeResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// One subscribed author in the listing.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub recipes_count: i64,
}

impl From<SubscribedAuthor> for AuthorResponse {
    fn from(author: SubscribedAuthor) -> Self {
        Self {
            id: author.id,
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            recipes_count: author.recipes_count,
        }
    }
}

/// Paginated subscription listing.
#[derive(Debug, Serialize)]
pub struct SubscriptionListResponse {
    pub count: i64,
    pub results: Vec<AuthorResponse>,
}
