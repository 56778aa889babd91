//! Route definitions for the `/organisations` resource.
//!
//! Also nests the organisation-scoped opportunity listing under
//! `/organisations/{id}/opportunities`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{opportunity, organisation};
use crate::state::AppState;

/// Routes mounted at `/organisations`.
///
/// ```text
/// GET    /                      -> list
/// GET    /{id}                  -> get_by_id
/// GET    /{id}/opportunities    -> opportunity::list_by_organisation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(organisation::list))
        .route("/{id}", get(organisation::get_by_id))
        .route(
            "/{id}/opportunities",
            get(opportunity::list_by_organisation),
        )
}
