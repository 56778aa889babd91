//! Repository for the `hoursLogs` container (partition key `/organisationId`).

use super::base;
use crate::models::hours_log::HoursLog;
use crate::store::{DocumentStore, StoreError};

/// Provides partition-aware access to hours logs.
pub struct HoursLogRepo;

impl HoursLogRepo {
    pub async fn create(store: &dyn DocumentStore, log: HoursLog) -> Result<HoursLog, StoreError> {
        base::create(store, log).await
    }

    /// Point read within an organisation's partition.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
        organisation_id: &str,
    ) -> Result<Option<HoursLog>, StoreError> {
        base::find(store, id, organisation_id).await
    }

    /// All hours logged against one organisation.
    pub async fn list_by_organisation(
        store: &dyn DocumentStore,
        organisation_id: &str,
    ) -> Result<Vec<HoursLog>, StoreError> {
        base::list_partition(store, organisation_id).await
    }

    /// All hours logged by one student (cross-partition).
    pub async fn list_by_student(
        store: &dyn DocumentStore,
        student_user_id: &str,
    ) -> Result<Vec<HoursLog>, StoreError> {
        base::list_where(store, "studentUserId", student_user_id).await
    }

    pub async fn replace(
        store: &dyn DocumentStore,
        log: HoursLog,
    ) -> Result<Option<HoursLog>, StoreError> {
        base::replace(store, log).await
    }

    pub async fn upsert(store: &dyn DocumentStore, log: HoursLog) -> Result<HoursLog, StoreError> {
        base::upsert(store, log).await
    }
}
