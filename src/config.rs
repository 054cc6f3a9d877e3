//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts.
//!
//! ## Required Variables
//!
//! - `TOKEN_SIGNING_SECRET` - HMAC key for API token hashing
//! - either `DATABASE_URL` or all of (`DB_HOST`, `DB_USER`,
//!   `DB_PASSWORD`, `DB_NAME`)
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - public origin of the service
//!   (default: `http://localhost:3000`); short links are minted on it
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `SHORT_LINK_TOKEN_LENGTH` - random token length (default: 8)
//! - `SHORT_LINK_MAX_ATTEMPTS` - collision retry cap (default: 10)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`,
//!   `DB_MAX_LIFETIME` - pool sizing

use anyhow::{Context, Result, ensure};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Public origin short links and derived long URLs are built on.
    pub base_url: Url,
    /// HMAC signing secret used to hash API tokens before storage.
    pub token_signing_secret: String,
    /// Number of random characters in a short link token.
    pub short_link_token_length: usize,
    /// Cap on the collision retry loop during short link generation.
    pub short_link_max_attempts: usize,

    // ── PgPool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection, seconds (default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds (default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or malformed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let base_url = Url::parse(&base_url).context("BASE_URL must be a valid absolute URL")?;
        ensure!(
            base_url.host_str().is_some(),
            "BASE_URL must include a host"
        );

        let token_signing_secret =
            env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

        let short_link_token_length = env::var("SHORT_LINK_TOKEN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);
        ensure!(
            short_link_token_length >= 4,
            "SHORT_LINK_TOKEN_LENGTH must be at least 4"
        );

        let short_link_max_attempts = env::var("SHORT_LINK_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        ensure!(
            short_link_max_attempts >= 1,
            "SHORT_LINK_MAX_ATTEMPTS must be at least 1"
        );

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let db_idle_timeout = env::var("DB_IDLE_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let db_max_lifetime = env::var("DB_MAX_LIFETIME")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1800);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            base_url,
            token_signing_secret,
            short_link_token_length,
            short_link_max_attempts,
            db_max_connections,
            db_connect_timeout,
            db_idle_timeout,
            db_max_lifetime,
        })
    }

    /// Loads database URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Constructed from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
    fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let user =
            env::var("DB_USER").context("DB_USER must be set when DATABASE_URL is not provided")?;
        let password = env::var("DB_PASSWORD")
            .context("DB_PASSWORD must be set when DATABASE_URL is not provided")?;
        let name =
            env::var("DB_NAME").context("DB_NAME must be set when DATABASE_URL is not provided")?;

        Ok(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
    }
}
