pub mod application;
pub mod health;
pub mod hours;
pub mod me;
pub mod opportunity;
pub mod organisation;
pub mod seed;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          liveness (public)
///
/// /opportunities                                   list published (public), create (organisation)
/// /opportunities/{id}                              get published (public), patch (organisation)
///
/// /organisations                                   list (public)
/// /organisations/{id}                              get (public)
/// /organisations/{id}/opportunities                every status (organisation)
///
/// /applications                                    create (student)
/// /applications/{id}?opportunityId=                get (authenticated)
/// /applications/{id}/status?opportunityId=         set status (organisation)
/// /applications/{id}/withdraw?opportunityId=       withdraw (student)
/// /applications/opportunities/{opportunity_id}     list (organisation)
///
/// /hours                                           create (student)
/// /hours/{id}?organisationId=                      get (authenticated)
/// /hours/{id}/approve?organisationId=              approve (organisation)
/// /hours/{id}/reject?organisationId=               reject (organisation)
/// /hours/organisations/{organisation_id}           list (organisation)
///
/// /me                                              caller profile (authenticated)
/// /me/applications                                 caller's applications (student)
/// /me/hours                                        caller's hours (student)
///
/// /seed                                            load fixtures (environment-gated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health::api_router())
        .nest("/opportunities", opportunity::router())
        .nest("/organisations", organisation::router())
        .nest("/applications", application::router())
        .nest("/hours", hours::router())
        .nest("/me", me::router())
        .nest("/seed", seed::router())
}
