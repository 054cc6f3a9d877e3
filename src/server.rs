//! HTTP server initialization and runtime setup.
//!
//! Handles database connection with startup retry, migrations, state
//! wiring and the Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with exponential backoff retry)
/// - migrations from `./migrations`
/// - application state and router
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database is unreachable after retries, the
/// bind fails, or the server errors at runtime.
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = AppState::build(
        Arc::new(pool),
        config.base_url.clone(),
        config.token_signing_secret.clone(),
        config.short_link_token_length,
        config.short_link_max_attempts,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Connects to PostgreSQL, retrying with jittered exponential backoff.
///
/// Five attempts starting at 200ms; a slow-to-boot database container is
/// the normal case this covers.
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(200).map(jitter).take(5);

    let pool = Retry::spawn(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await
            .inspect_err(|e| tracing::warn!("database connection attempt failed: {e}"))
    })
    .await
    .context("Failed to connect to database")?;

    Ok(pool)
}
