//! Shared response helpers for API handlers.

use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `201 Created` with a `Location` header pointing at the new resource.
///
/// ```ignore
/// Ok(created(format!("/api/opportunities/{}", opp.id), opp))
/// ```
pub fn created<T: Serialize>(location: String, body: T) -> Response {
    let mut response = (StatusCode::CREATED, Json(body)).into_response();
    match HeaderValue::try_from(location) {
        Ok(value) => {
            response.headers_mut().insert(LOCATION, value);
        }
        Err(e) => tracing::warn!(error = %e, "Location header not representable, omitted"),
    }
    response
}
