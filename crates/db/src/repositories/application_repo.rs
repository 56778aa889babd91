//! Repository for the `applications` container (partition key `/opportunityId`).

use super::base;
use crate::models::application::Application;
use crate::store::{DocumentStore, StoreError};

/// Provides partition-aware access to applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    pub async fn create(
        store: &dyn DocumentStore,
        application: Application,
    ) -> Result<Application, StoreError> {
        base::create(store, application).await
    }

    /// Point read within an opportunity's partition.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
        opportunity_id: &str,
    ) -> Result<Option<Application>, StoreError> {
        base::find(store, id, opportunity_id).await
    }

    /// All applications made against one opportunity.
    pub async fn list_by_opportunity(
        store: &dyn DocumentStore,
        opportunity_id: &str,
    ) -> Result<Vec<Application>, StoreError> {
        base::list_partition(store, opportunity_id).await
    }

    /// All applications made by one student (cross-partition).
    pub async fn list_by_student(
        store: &dyn DocumentStore,
        student_user_id: &str,
    ) -> Result<Vec<Application>, StoreError> {
        base::list_where(store, "studentUserId", student_user_id).await
    }

    pub async fn replace(
        store: &dyn DocumentStore,
        application: Application,
    ) -> Result<Option<Application>, StoreError> {
        base::replace(store, application).await
    }

    pub async fn upsert(
        store: &dyn DocumentStore,
        application: Application,
    ) -> Result<Application, StoreError> {
        base::upsert(store, application).await
    }

    pub async fn delete(
        store: &dyn DocumentStore,
        id: &str,
        opportunity_id: &str,
    ) -> Result<bool, StoreError> {
        base::delete::<Application>(store, id, opportunity_id).await
    }
}
