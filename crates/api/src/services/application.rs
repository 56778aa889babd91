//! Applications: students apply, organisations decide.

use chrono::Utc;
use validator::Validate;
use voli_core::application::{
    validate_application_status, APPLICATION_SUBMITTED, APPLICATION_WITHDRAWN,
};
use voli_db::models::application::{Application, CreateApplication, UpdateApplicationStatus};
use voli_db::models::document::new_document_id;
use voli_db::repositories::ApplicationRepo;
use voli_db::DocumentStore;

use crate::error::AppResult;

/// Apply to an opportunity on behalf of `student_user_id`.
pub async fn create(
    store: &dyn DocumentStore,
    student_user_id: &str,
    input: CreateApplication,
) -> AppResult<Application> {
    input.validate()?;

    let now = Utc::now();
    let application = Application {
        id: new_document_id(),
        opportunity_id: input.opportunity_id,
        student_user_id: student_user_id.to_string(),
        status: APPLICATION_SUBMITTED.to_string(),
        message: input.message,
        created_at: now,
        updated_at: now,
    };

    let created = ApplicationRepo::create(store, application).await?;
    tracing::info!(
        application_id = %created.id,
        opportunity_id = %created.opportunity_id,
        student_user_id,
        "Application submitted"
    );
    Ok(created)
}

pub async fn find(
    store: &dyn DocumentStore,
    id: &str,
    opportunity_id: &str,
) -> AppResult<Option<Application>> {
    Ok(ApplicationRepo::find_by_id(store, id, opportunity_id).await?)
}

pub async fn list_by_opportunity(
    store: &dyn DocumentStore,
    opportunity_id: &str,
) -> AppResult<Vec<Application>> {
    Ok(ApplicationRepo::list_by_opportunity(store, opportunity_id).await?)
}

pub async fn list_by_student(
    store: &dyn DocumentStore,
    student_user_id: &str,
) -> AppResult<Vec<Application>> {
    Ok(ApplicationRepo::list_by_student(store, student_user_id).await?)
}

/// Set an application's status. Any status in the vocabulary is accepted
/// from any current status.
pub async fn update_status(
    store: &dyn DocumentStore,
    id: &str,
    opportunity_id: &str,
    input: UpdateApplicationStatus,
) -> AppResult<Option<Application>> {
    input.validate()?;
    validate_application_status(&input.status)?;

    let Some(mut application) = find(store, id, opportunity_id).await? else {
        return Ok(None);
    };
    application.status = input.status;

    let updated = ApplicationRepo::replace(store, application).await?;
    if let Some(app) = &updated {
        tracing::info!(
            application_id = %app.id,
            opportunity_id,
            status = %app.status,
            "Application status changed"
        );
    }
    Ok(updated)
}

/// Withdraw a student's own application. Another student's application
/// behaves as if it did not exist.
pub async fn withdraw(
    store: &dyn DocumentStore,
    id: &str,
    opportunity_id: &str,
    student_user_id: &str,
) -> AppResult<Option<Application>> {
    let Some(mut application) = find(store, id, opportunity_id).await? else {
        return Ok(None);
    };
    if application.student_user_id != student_user_id {
        tracing::debug!(
            application_id = id,
            student_user_id,
            "Withdraw attempted on another student's application"
        );
        return Ok(None);
    }
    application.status = APPLICATION_WITHDRAWN.to_string();

    let updated = ApplicationRepo::replace(store, application).await?;
    if updated.is_some() {
        tracing::info!(application_id = id, opportunity_id, "Application withdrawn");
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use voli_core::application::APPLICATION_ACCEPTED;
    use voli_core::error::CoreError;
    use voli_db::MemoryDocumentStore;

    use super::*;
    use crate::error::AppError;

    fn apply_to(opportunity_id: &str) -> CreateApplication {
        CreateApplication {
            opportunity_id: opportunity_id.into(),
            message: Some("Keen to help".into()),
        }
    }

    fn status(status: &str) -> UpdateApplicationStatus {
        UpdateApplicationStatus {
            status: status.into(),
        }
    }

    #[tokio::test]
    async fn create_is_submitted_and_owned_by_caller() {
        let store = MemoryDocumentStore::new();
        let app = create(&store, "student-1", apply_to("opp-1")).await.unwrap();

        assert_eq!(app.status, APPLICATION_SUBMITTED);
        assert_eq!(app.student_user_id, "student-1");
        assert_eq!(app.message.as_deref(), Some("Keen to help"));
    }

    #[tokio::test]
    async fn create_requires_opportunity_id() {
        let store = MemoryDocumentStore::new();
        assert_matches!(
            create(&store, "student-1", apply_to("")).await,
            Err(AppError::Validation(_))
        );
    }

    #[tokio::test]
    async fn accepted_status_is_visible_only_in_its_partition() {
        let store = MemoryDocumentStore::new();
        let app = create(&store, "student-1", apply_to("opp-1")).await.unwrap();

        update_status(&store, &app.id, "opp-1", status(APPLICATION_ACCEPTED))
            .await
            .unwrap()
            .unwrap();

        let fetched = find(&store, &app.id, "opp-1").await.unwrap().unwrap();
        assert_eq!(fetched.status, APPLICATION_ACCEPTED);
        assert!(find(&store, &app.id, "opp-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status() {
        let store = MemoryDocumentStore::new();
        let app = create(&store, "student-1", apply_to("opp-1")).await.unwrap();

        assert_matches!(
            update_status(&store, &app.id, "opp-1", status("maybe")).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[tokio::test]
    async fn update_status_in_wrong_partition_is_none() {
        let store = MemoryDocumentStore::new();
        let app = create(&store, "student-1", apply_to("opp-1")).await.unwrap();

        let result = update_status(&store, &app.id, "opp-9", status(APPLICATION_ACCEPTED))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn withdraw_only_by_owner() {
        let store = MemoryDocumentStore::new();
        let app = create(&store, "student-1", apply_to("opp-1")).await.unwrap();

        assert!(withdraw(&store, &app.id, "opp-1", "student-2").await.unwrap().is_none());

        let withdrawn = withdraw(&store, &app.id, "opp-1", "student-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(withdrawn.status, APPLICATION_WITHDRAWN);
    }

    #[tokio::test]
    async fn student_listing_spans_opportunities() {
        let store = MemoryDocumentStore::new();
        create(&store, "student-1", apply_to("opp-1")).await.unwrap();
        create(&store, "student-1", apply_to("opp-2")).await.unwrap();
        create(&store, "student-2", apply_to("opp-1")).await.unwrap();

        assert_eq!(list_by_student(&store, "student-1").await.unwrap().len(), 2);
        assert_eq!(list_by_opportunity(&store, "opp-1").await.unwrap().len(), 2);
    }
}
