//! Handlers for the `/opportunities` resource.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use voli_core::error::CoreError;
use voli_db::models::opportunity::{CreateOpportunity, Opportunity, UpdateOpportunity};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireOrganisation;
use crate::response::created;
use crate::services::opportunity as service;
use crate::state::AppState;

const ENTITY: &str = "Opportunity";

/// POST /api/opportunities
///
/// New opportunities start as drafts in the caller's organisation.
pub async fn create(
    RequireOrganisation(user): RequireOrganisation,
    State(state): State<AppState>,
    Json(input): Json<CreateOpportunity>,
) -> AppResult<Response> {
    let opportunity = service::create(state.store.as_ref(), user.organisation_id(), input).await?;
    Ok(created(
        format!("/api/opportunities/{}", opportunity.id),
        opportunity,
    ))
}

/// GET /api/opportunities
pub async fn list_published(State(state): State<AppState>) -> AppResult<Json<Vec<Opportunity>>> {
    let opportunities = service::list_published(state.store.as_ref()).await?;
    Ok(Json(opportunities))
}

/// GET /api/opportunities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Opportunity>> {
    let opportunity = service::find_published(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(opportunity))
}

/// PATCH /api/opportunities/{id}
///
/// Only opportunities in the caller's own organisation can be patched.
pub async fn update(
    RequireOrganisation(user): RequireOrganisation,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateOpportunity>,
) -> AppResult<Json<Opportunity>> {
    let opportunity = service::update(state.store.as_ref(), &id, user.organisation_id(), patch)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(ENTITY, id)))?;
    Ok(Json(opportunity))
}

/// GET /api/organisations/{organisation_id}/opportunities
///
/// Every status, for the organisation's own dashboard. Admins may list any
/// organisation.
pub async fn list_by_organisation(
    RequireOrganisation(user): RequireOrganisation,
    State(state): State<AppState>,
    Path(organisation_id): Path<String>,
) -> AppResult<Json<Vec<Opportunity>>> {
    if !user.is_admin() && user.organisation_id() != organisation_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot list another organisation's opportunities".into(),
        )));
    }
    let opportunities = service::list_for_organisation(state.store.as_ref(), &organisation_id).await?;
    Ok(Json(opportunities))
}
