//! Route definitions for `/seed`.

use axum::routing::post;
use axum::Router;

use crate::handlers::seed;
use crate::state::AppState;

/// Routes mounted at `/seed`.
///
/// ```text
/// POST   /    -> seed_database
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(seed::seed_database))
}
