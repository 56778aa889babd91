use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use voli_core::types::Timestamp;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the document store is reachable.
    pub store_healthy: bool,
}

/// Liveness payload for `/api/health`.
#[derive(Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub timestamp: Timestamp,
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            false
        }
    };

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// GET /api/health -- process liveness only, no store round trip.
async fn api_health() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now(),
    })
}

/// Mount `/health` (intended for root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Routes mounted at `/api/health`.
pub fn api_router() -> Router<AppState> {
    Router::new().route("/", get(api_health))
}
