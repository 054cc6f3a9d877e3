//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{ShortLinkInsert, ShortLinkRepository};
use crate::error::AppError;
use crate::utils::short_url::{parse_long_url, short_url_for};
use crate::utils::token_generator::generate_token;
use serde_json::json;

/// Service mapping long URLs to short, collision-free URLs and back.
///
/// Creation is an idempotent get-or-create: for a given long URL at most
/// one short link ever exists, and repeated requests return the same row.
pub struct ShortLinkService<S: ShortLinkRepository> {
    repository: Arc<S>,
    token_length: usize,
    max_attempts: usize,
}

impl<S: ShortLinkRepository> ShortLinkService<S> {
    /// Creates a new short link service.
    ///
    /// `token_length` is the number of random characters appended to the
    /// short-link prefix; `max_attempts` caps the collision retry loop.
    pub fn new(repository: Arc<S>, token_length: usize, max_attempts: usize) -> Self {
        Self {
            repository,
            token_length,
            max_attempts,
        }
    }

    /// Returns the short link for `long_url`, creating it if absent.
    ///
    /// The boolean in the result is `true` when a new row was created.
    ///
    /// # Collision handling
    ///
    /// A fresh random token is drawn for each attempt. A `short_url`
    /// uniqueness violation re-draws the token; a `long_url` uniqueness
    /// violation means a concurrent caller created the row first, in
    /// which case their row is returned. Attempts are capped: exhausting
    /// the cap is an internal error, not an unbounded loop.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed long URL and
    /// [`AppError::Internal`] when the retry budget is exhausted or the
    /// store fails.
    pub async fn create_or_get(&self, long_url: &str) -> Result<(ShortLink, bool), AppError> {
        let parsed = parse_long_url(long_url).map_err(|e| {
            AppError::bad_request(
                "Invalid URL format",
                json!({ "url": long_url, "reason": e.to_string() }),
            )
        })?;
        let long_url = parsed.to_string();

        if let Some(existing) = self.repository.find_by_long_url(&long_url).await? {
            return Ok((existing, false));
        }

        for _ in 0..self.max_attempts {
            let token = generate_token(&mut rand::rng(), self.token_length);
            let short_url = short_url_for(&parsed, &token);

            match self
                .repository
                .insert(NewShortLink {
                    long_url: long_url.clone(),
                    short_url,
                })
                .await?
            {
                ShortLinkInsert::Created(link) => {
                    metrics::counter!("short_links_created_total").increment(1);
                    return Ok((link, true));
                }
                ShortLinkInsert::DuplicateLongUrl => {
                    // Lost the race against a concurrent create for the
                    // same long URL; the winner's row is the answer.
                    let existing = self
                        .repository
                        .find_by_long_url(&long_url)
                        .await?
                        .ok_or_else(|| {
                            AppError::internal(
                                "Short link vanished after a duplicate insert",
                                json!({ "long_url": long_url }),
                            )
                        })?;
                    return Ok((existing, false));
                }
                ShortLinkInsert::DuplicateShortUrl => {
                    tracing::debug!("short url token collision, redrawing");
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short link",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves an exact short URL string to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no active link matches.
    pub async fn resolve(&self, short_url: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_short_url(short_url)
            .await?
            .filter(|link| link.is_active)
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_url": short_url }))
            })
    }
}
