//! Repository for the `opportunities` container (partition key `/organisationId`).

use voli_core::opportunity::OPPORTUNITY_PUBLISHED;

use super::base;
use crate::models::opportunity::Opportunity;
use crate::store::{DocumentStore, StoreError};

/// Provides partition-aware access to opportunities.
pub struct OpportunityRepo;

impl OpportunityRepo {
    /// Insert a new opportunity.
    pub async fn create(
        store: &dyn DocumentStore,
        opportunity: Opportunity,
    ) -> Result<Opportunity, StoreError> {
        base::create(store, opportunity).await
    }

    /// Point read within an organisation's partition.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
        organisation_id: &str,
    ) -> Result<Option<Opportunity>, StoreError> {
        base::find(store, id, organisation_id).await
    }

    /// Look an opportunity up by id alone.
    ///
    /// Ids are generated globally unique, so the first match is returned.
    /// This is a cross-partition query; prefer [`Self::find_by_id`] when the
    /// organisation is known.
    pub async fn find_by_id_any_partition(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Opportunity>, StoreError> {
        let mut matches = base::list_where::<Opportunity>(store, "id", id).await?;
        if matches.len() > 1 {
            tracing::warn!(id, count = matches.len(), "Opportunity id present in several partitions");
        }
        Ok(if matches.is_empty() {
            None
        } else {
            Some(matches.swap_remove(0))
        })
    }

    /// Every opportunity owned by one organisation, whatever its status.
    pub async fn list_by_organisation(
        store: &dyn DocumentStore,
        organisation_id: &str,
    ) -> Result<Vec<Opportunity>, StoreError> {
        base::list_partition(store, organisation_id).await
    }

    /// Every published opportunity across all organisations.
    pub async fn list_published(store: &dyn DocumentStore) -> Result<Vec<Opportunity>, StoreError> {
        base::list_where(store, "status", OPPORTUNITY_PUBLISHED).await
    }

    /// Replace a stored opportunity. `None` if it no longer exists.
    pub async fn replace(
        store: &dyn DocumentStore,
        opportunity: Opportunity,
    ) -> Result<Option<Opportunity>, StoreError> {
        base::replace(store, opportunity).await
    }

    /// Insert or overwrite (used by seeding).
    pub async fn upsert(
        store: &dyn DocumentStore,
        opportunity: Opportunity,
    ) -> Result<Opportunity, StoreError> {
        base::upsert(store, opportunity).await
    }
}
