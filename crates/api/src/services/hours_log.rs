//! Volunteered time: students log it, organisations review it.

use chrono::Utc;
use validator::Validate;
use voli_core::hours::{HOURS_APPROVED, HOURS_REJECTED, HOURS_SUBMITTED};
use voli_db::models::document::new_document_id;
use voli_db::models::hours_log::{CreateHoursLog, HoursLog};
use voli_db::repositories::HoursLogRepo;
use voli_db::DocumentStore;

use crate::error::AppResult;

/// Log time on behalf of `student_user_id`, pending review.
pub async fn create(
    store: &dyn DocumentStore,
    student_user_id: &str,
    input: CreateHoursLog,
) -> AppResult<HoursLog> {
    input.validate()?;

    let now = Utc::now();
    let log = HoursLog {
        id: new_document_id(),
        organisation_id: input.organisation_id,
        opportunity_id: input.opportunity_id,
        student_user_id: student_user_id.to_string(),
        date: input.date,
        minutes: input.minutes,
        notes: input.notes,
        status: HOURS_SUBMITTED.to_string(),
        reviewed_by_user_id: None,
        created_at: now,
        updated_at: now,
    };

    let created = HoursLogRepo::create(store, log).await?;
    tracing::info!(
        hours_log_id = %created.id,
        organisation_id = %created.organisation_id,
        student_user_id,
        minutes = created.minutes,
        "Hours logged"
    );
    Ok(created)
}

pub async fn find(
    store: &dyn DocumentStore,
    id: &str,
    organisation_id: &str,
) -> AppResult<Option<HoursLog>> {
    Ok(HoursLogRepo::find_by_id(store, id, organisation_id).await?)
}

pub async fn list_by_organisation(
    store: &dyn DocumentStore,
    organisation_id: &str,
) -> AppResult<Vec<HoursLog>> {
    Ok(HoursLogRepo::list_by_organisation(store, organisation_id).await?)
}

pub async fn list_by_student(
    store: &dyn DocumentStore,
    student_user_id: &str,
) -> AppResult<Vec<HoursLog>> {
    Ok(HoursLogRepo::list_by_student(store, student_user_id).await?)
}

pub async fn approve(
    store: &dyn DocumentStore,
    id: &str,
    organisation_id: &str,
    reviewer_user_id: &str,
) -> AppResult<Option<HoursLog>> {
    review(store, id, organisation_id, reviewer_user_id, HOURS_APPROVED).await
}

pub async fn reject(
    store: &dyn DocumentStore,
    id: &str,
    organisation_id: &str,
    reviewer_user_id: &str,
) -> AppResult<Option<HoursLog>> {
    review(store, id, organisation_id, reviewer_user_id, HOURS_REJECTED).await
}

/// Record a review decision. The previous status is not checked, so a
/// decision can be reversed.
async fn review(
    store: &dyn DocumentStore,
    id: &str,
    organisation_id: &str,
    reviewer_user_id: &str,
    decision: &str,
) -> AppResult<Option<HoursLog>> {
    let Some(mut log) = find(store, id, organisation_id).await? else {
        return Ok(None);
    };
    log.status = decision.to_string();
    log.reviewed_by_user_id = Some(reviewer_user_id.to_string());

    let updated = HoursLogRepo::replace(store, log).await?;
    if updated.is_some() {
        tracing::info!(
            hours_log_id = id,
            organisation_id,
            reviewer_user_id,
            decision,
            "Hours reviewed"
        );
    }
    Ok(updated)
}
