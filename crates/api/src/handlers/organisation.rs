//! Handlers for the public `/organisations` directory.

use axum::extract::{Path, State};
use axum::Json;
use voli_core::error::CoreError;
use voli_db::models::organisation::Organisation;
use voli_db::repositories::OrganisationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/organisations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Organisation>>> {
    let organisations = OrganisationRepo::list(state.store.as_ref()).await?;
    Ok(Json(organisations))
}

/// GET /api/organisations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Organisation>> {
    let organisation = OrganisationRepo::find_by_id(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Organisation", id)))?;
    Ok(Json(organisation))
}
