//! Route definitions for the `/applications` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::application;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PATCH  /{id}/status                        -> update_status
/// PATCH  /{id}/withdraw                      -> withdraw
/// GET    /opportunities/{opportunity_id}     -> list_by_opportunity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(application::create))
        .route("/{id}", get(application::get_by_id))
        .route("/{id}/status", patch(application::update_status))
        .route("/{id}/withdraw", patch(application::withdraw))
        .route(
            "/opportunities/{opportunity_id}",
            get(application::list_by_opportunity),
        )
}
