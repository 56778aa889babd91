//! Handlers for the `/applications` resource.
//!
//! Applications are partitioned by opportunity, so every single-document
//! route takes `?opportunityId=`.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use voli_core::error::CoreError;
use voli_core::roles::satisfies_organisation;
use voli_db::models::application::{Application, CreateApplication, UpdateApplicationStatus};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireOrganisation, RequireStudent};
use crate::query::OpportunityScope;
use crate::response::created;
use crate::services::application as service;
use crate::state::AppState;

const ENTITY: &str = "Application";

/// POST /api/applications
pub async fn create(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
    Json(input): Json<CreateApplication>,
) -> AppResult<Response> {
    let application = service::create(state.store.as_ref(), &user.user_id, input).await?;
    Ok(created(
        format!(
            "/api/applications/{}?opportunityId={}",
            application.id, application.opportunity_id
        ),
        application,
    ))
}

/// GET /api/applications/{id}?opportunityId=
///
/// Students only see their own applications.
pub async fn get_by_id(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(scope): Query<OpportunityScope>,
) -> AppResult<Json<Application>> {
    let opportunity_id = scope.require()?;
    let application = service::find(state.store.as_ref(), &id, &opportunity_id)
        .await?
        .filter(|app| satisfies_organisation(&user.role) || app.student_user_id == user.user_id)
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(application))
}

/// GET /api/applications/opportunities/{opportunity_id}
pub async fn list_by_opportunity(
    RequireOrganisation(_user): RequireOrganisation,
    State(state): State<AppState>,
    Path(opportunity_id): Path<String>,
) -> AppResult<Json<Vec<Application>>> {
    let applications = service::list_by_opportunity(state.store.as_ref(), &opportunity_id).await?;
    Ok(Json(applications))
}

/// PATCH /api/applications/{id}/status?opportunityId=
pub async fn update_status(
    RequireOrganisation(user): RequireOrganisation,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(scope): Query<OpportunityScope>,
    Json(input): Json<UpdateApplicationStatus>,
) -> AppResult<Json<Application>> {
    let opportunity_id = scope.require()?;
    let application = service::update_status(state.store.as_ref(), &id, &opportunity_id, input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;

    tracing::debug!(
        application_id = %application.id,
        reviewer_user_id = %user.user_id,
        "Application decision recorded"
    );
    Ok(Json(application))
}

/// PATCH /api/applications/{id}/withdraw?opportunityId=
pub async fn withdraw(
    RequireStudent(user): RequireStudent,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(scope): Query<OpportunityScope>,
) -> AppResult<Json<Application>> {
    let opportunity_id = scope.require()?;
    let application = service::withdraw(state.store.as_ref(), &id, &opportunity_id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(application))
}
