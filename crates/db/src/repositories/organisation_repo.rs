//! Repository for the `organisations` container (partition key `/id`).

use super::base;
use crate::models::organisation::Organisation;
use crate::store::{DocumentStore, StoreError};

pub struct OrganisationRepo;

impl OrganisationRepo {
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Organisation>, StoreError> {
        base::find(store, id, id).await
    }

    /// Every organisation (full container listing).
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Organisation>, StoreError> {
        base::list_all(store).await
    }

    pub async fn upsert(
        store: &dyn DocumentStore,
        organisation: Organisation,
    ) -> Result<Organisation, StoreError> {
        base::upsert(store, organisation).await
    }
}
