//! Route definitions for the `/hours` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::hours;
use crate::state::AppState;

/// Routes mounted at `/hours`.
///
/// ```text
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PATCH  /{id}/approve                       -> approve
/// PATCH  /{id}/reject                        -> reject
/// GET    /organisations/{organisation_id}    -> list_by_organisation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(hours::create))
        .route("/{id}", get(hours::get_by_id))
        .route("/{id}/approve", patch(hours::approve))
        .route("/{id}/reject", patch(hours::reject))
        .route(
            "/organisations/{organisation_id}",
            get(hours::list_by_organisation),
        )
}
