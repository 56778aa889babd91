//! Handlers for the `/hours` resource.
//!
//! Hours logs are partitioned by organisation, so every single-document
//! route takes `?organisationId=`.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use voli_core::error::CoreError;
use voli_core::roles::satisfies_organisation;
use voli_db::models::hours_log::{CreateHoursLog, HoursLog};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireOrganisation, RequireStudent};
use crate::query::OrganisationScope;
use crate::response::created;
use crate::services::hours_log as service;
use crate::state::AppState;

const ENTITY: &str = "HoursLog";

/// POST /api/hours
pub async fn create(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
    Json(input): Json<CreateHoursLog>,
) -> AppResult<Response> {
    let log = service::create(state.store.as_ref(), &user.user_id, input).await?;
    Ok(created(
        format!("/api/hours/{}?organisationId={}", log.id, log.organisation_id),
        log,
    ))
}

/// GET /api/hours/{id}?organisationId=
///
/// Students only see their own logs.
pub async fn get_by_id(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(scope): Query<OrganisationScope>,
) -> AppResult<Json<HoursLog>> {
    let organisation_id = scope.require()?;
    let log = service::find(state.store.as_ref(), &id, &organisation_id)
        .await?
        .filter(|log| satisfies_organisation(&user.role) || log.student_user_id == user.user_id)
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(log))
}

/// GET /api/hours/organisations/{organisation_id}
pub async fn list_by_organisation(
    RequireOrganisation(_user): RequireOrganisation,
    State(state): State<AppState>,
    Path(organisation_id): Path<String>,
) -> AppResult<Json<Vec<HoursLog>>> {
    let logs = service::list_by_organisation(state.store.as_ref(), &organisation_id).await?;
    Ok(Json(logs))
}

/// PATCH /api/hours/{id}/approve?organisationId=
pub async fn approve(
    RequireOrganisation(user): RequireOrganisation,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(scope): Query<OrganisationScope>,
) -> AppResult<Json<HoursLog>> {
    let organisation_id = scope.require()?;
    let log = service::approve(state.store.as_ref(), &id, &organisation_id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(log))
}

/// PATCH /api/hours/{id}/reject?organisationId=
pub async fn reject(
    RequireOrganisation(user): RequireOrganisation,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(scope): Query<OrganisationScope>,
) -> AppResult<Json<HoursLog>> {
    let organisation_id = scope.require()?;
    let log = service::reject(state.store.as_ref(), &id, &organisation_id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(log))
}
