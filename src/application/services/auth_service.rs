//! Authentication service resolving API tokens to users.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::CurrentUser;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Authenticates requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison, so a read-only copy of the database is not
/// enough to forge a token.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when tokens were
    /// provisioned by the admin CLI.
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Resolves a raw token to the current user.
    ///
    /// Refreshes `last_used_at` best-effort on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown or revoked tokens
    /// and [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<CurrentUser, AppError> {
        let token_hash = self.hash_token(token);

        let Some(user_id) = self.repository.find_user_by_hash(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or revoked token" }),
            ));
        };

        let _ = self.repository.touch_last_used(&token_hash).await;

        Ok(CurrentUser { id: user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn compute_expected_hash(token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[tokio::test]
    async fn test_authenticate_resolves_user() {
        let mut repo = MockTokenRepository::new();

        let token = "valid-token";
        let expected_hash = compute_expected_hash(token);

        repo.expect_find_user_by_hash()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(42)));
        repo.expect_touch_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(repo), test_secret());
        let current = service.authenticate(token).await.unwrap();

        assert_eq!(current.id, 42);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut repo = MockTokenRepository::new();
        repo.expect_find_user_by_hash()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repo), test_secret());
        let result = service.authenticate("invalid-token").await;

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_hash_token_consistency() {
        let service = AuthService::new(Arc::new(MockTokenRepository::new()), test_secret());

        let hash1 = service.hash_token("test-token");
        let hash2 = service.hash_token("test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        let svc1 = AuthService::new(
            Arc::new(MockTokenRepository::new()),
            "secret-a".to_string(),
        );
        let svc2 = AuthService::new(
            Arc::new(MockTokenRepository::new()),
            "secret-b".to_string(),
        );

        assert_ne!(svc1.hash_token("token"), svc2.hash_token("token"));
    }
}
