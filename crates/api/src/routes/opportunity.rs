//! Route definitions for the `/opportunities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::opportunity;
use crate::state::AppState;

/// Routes mounted at `/opportunities`.
///
/// ```text
/// GET    /        -> list_published
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(opportunity::list_published).post(opportunity::create))
        .route(
            "/{id}",
            get(opportunity::get_by_id).patch(opportunity::update),
        )
}
