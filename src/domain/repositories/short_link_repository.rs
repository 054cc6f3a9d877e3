//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an insert attempt against the uniqueness constraints on
/// `short_links`.
///
/// The two duplicate cases are distinguishable so the service can react
/// differently: a duplicate `long_url` means a concurrent caller already
/// created the row (re-read and return it), a duplicate `short_url` means
/// the random token collided (re-draw and retry).
#[derive(Debug, Clone)]
pub enum ShortLinkInsert {
    Created(ShortLink),
    DuplicateLongUrl,
    DuplicateShortUrl,
}

/// Repository interface for short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Attempts to insert a new short link.
    ///
    /// A unique-constraint violation on `long_url` or `short_url` is
    /// reported through [`ShortLinkInsert`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLinkInsert, AppError>;

    /// Finds a short link by its canonical long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Point lookup by the exact short URL string.
    ///
    /// Returns inactive rows too; the service decides whether a
    /// soft-disabled link resolves.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<ShortLink>, AppError>;
}
