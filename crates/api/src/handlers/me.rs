//! Handlers for the caller's own profile and activity.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use voli_db::models::application::Application;
use voli_db::models::hours_log::HoursLog;
use voli_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAuth, RequireStudent};
use crate::services::{application, hours_log};
use crate::state::AppState;

/// Profile of the authenticated caller.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: String,
}

/// GET /api/me
///
/// Built from the token claims. Email and name missing from the token are
/// filled in from the stored user document when one exists.
pub async fn get_me(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<MeResponse>> {
    let mut me = MeResponse {
        id: user.user_id,
        email: user.email,
        name: user.name,
        role: user.role,
    };

    if me.email.is_none() || me.name.is_none() {
        if let Some(stored) = UserRepo::find_by_id(state.store.as_ref(), &me.id).await? {
            me.email.get_or_insert(stored.email);
            me.name.get_or_insert(stored.name);
        }
    }

    Ok(Json(me))
}

/// GET /api/me/applications
pub async fn my_applications(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Application>>> {
    let applications = application::list_by_student(state.store.as_ref(), &user.user_id).await?;
    Ok(Json(applications))
}

/// GET /api/me/hours
pub async fn my_hours(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HoursLog>>> {
    let logs = hours_log::list_by_student(state.store.as_ref(), &user.user_id).await?;
    Ok(Json(logs))
}
