//! Handler for loading development fixtures.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};
use voli_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::services::seed;
use crate::state::AppState;

/// Header carrying the shared seeding secret.
pub const SEED_SECRET_HEADER: &str = "x-seed-secret";

/// POST /api/seed
///
/// Gated, in order: never in production (403), only when enabled (400), and
/// with the configured secret when one is set (401).
pub async fn seed_database(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<Value>> {
    if state.config.environment.is_production() {
        tracing::warn!("Seed request refused in production");
        return Err(AppError::Core(CoreError::Forbidden(
            "Seeding is not allowed in production".into(),
        )));
    }

    let seed_config = &state.config.seed;
    if !seed_config.allow_seeding {
        return Err(AppError::BadRequest(
            "Seeding is not enabled. Set SEED_ALLOW=true".into(),
        ));
    }

    if let Some(expected) = &seed_config.secret {
        let provided = headers
            .get(SEED_SECRET_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            tracing::warn!("Seed request with invalid secret");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid seed secret".into(),
            )));
        }
    }

    let summary = seed::seed(state.store.as_ref()).await?;

    Ok(Json(json!({
        "message": "Database seeded successfully",
        "counts": summary,
    })))
}
