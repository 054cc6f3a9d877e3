//! User entities.

/// A user row. Registration lives outside this service; rows are
/// provisioned by the admin CLI or by the surrounding platform.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// The authenticated identity attached to a request by the auth
/// middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

/// A subscribed-to author together with their recipe count, as returned
/// by the subscription listing.
#[derive(Debug, Clone)]
pub struct SubscribedAuthor {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub recipes_count: i64,
}
