//! Health check handler.

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// Probes the database with a trivial query. Answers 200 when healthy,
/// 503 when the database is unreachable.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            warn!("health check database probe failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}
