//! Route definitions for `/me`.

use axum::routing::get;
use axum::Router;

use crate::handlers::me;
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET    /                -> get_me
/// GET    /applications    -> my_applications
/// GET    /hours           -> my_hours
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(me::get_me))
        .route("/applications", get(me::my_applications))
        .route("/hours", get(me::my_hours))
}
