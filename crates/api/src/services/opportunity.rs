//! Opportunity publishing and discovery.

use chrono::Utc;
use validator::Validate;
use voli_core::opportunity::{validate_opportunity_status, OPPORTUNITY_DRAFT, OPPORTUNITY_PUBLISHED};
use voli_db::models::document::new_document_id;
use voli_db::models::opportunity::{CreateOpportunity, Opportunity, UpdateOpportunity};
use voli_db::repositories::OpportunityRepo;
use voli_db::DocumentStore;

use crate::error::AppResult;

/// Every published opportunity, across organisations.
pub async fn list_published(store: &dyn DocumentStore) -> AppResult<Vec<Opportunity>> {
    Ok(OpportunityRepo::list_published(store).await?)
}

/// Public lookup by id. Drafts and closed opportunities are not public.
pub async fn find_published(store: &dyn DocumentStore, id: &str) -> AppResult<Option<Opportunity>> {
    let found = OpportunityRepo::find_by_id_any_partition(store, id).await?;
    Ok(found.filter(|opp| opp.status == OPPORTUNITY_PUBLISHED))
}

pub async fn find_for_organisation(
    store: &dyn DocumentStore,
    id: &str,
    organisation_id: &str,
) -> AppResult<Option<Opportunity>> {
    Ok(OpportunityRepo::find_by_id(store, id, organisation_id).await?)
}

/// Every opportunity an organisation owns, drafts and closed ones included.
pub async fn list_for_organisation(
    store: &dyn DocumentStore,
    organisation_id: &str,
) -> AppResult<Vec<Opportunity>> {
    Ok(OpportunityRepo::list_by_organisation(store, organisation_id).await?)
}

/// Post a new opportunity as a draft owned by `organisation_id`.
pub async fn create(
    store: &dyn DocumentStore,
    organisation_id: &str,
    input: CreateOpportunity,
) -> AppResult<Opportunity> {
    input.validate()?;

    let now = Utc::now();
    let opportunity = Opportunity {
        id: new_document_id(),
        organisation_id: organisation_id.to_string(),
        title: input.title,
        description: input.description,
        location: input.location,
        skills: input.skills,
        cause_areas: input.cause_areas,
        time_commitment: input.time_commitment,
        status: OPPORTUNITY_DRAFT.to_string(),
        created_at: now,
        updated_at: now,
    };

    let created = OpportunityRepo::create(store, opportunity).await?;
    tracing::info!(
        opportunity_id = %created.id,
        organisation_id,
        "Opportunity created"
    );
    Ok(created)
}

/// Apply a partial update. Only fields present in `patch` change.
pub async fn update(
    store: &dyn DocumentStore,
    id: &str,
    organisation_id: &str,
    patch: UpdateOpportunity,
) -> AppResult<Option<Opportunity>> {
    if let Some(status) = &patch.status {
        validate_opportunity_status(status)?;
    }

    let Some(mut opportunity) = find_for_organisation(store, id, organisation_id).await? else {
        return Ok(None);
    };
    opportunity.apply_update(patch);

    let updated = OpportunityRepo::replace(store, opportunity).await?;
    if let Some(opp) = &updated {
        tracing::info!(
            opportunity_id = %opp.id,
            organisation_id,
            status = %opp.status,
            "Opportunity updated"
        );
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use voli_core::error::CoreError;
    use voli_db::MemoryDocumentStore;

    use super::*;
    use crate::error::AppError;

    fn input(title: &str) -> CreateOpportunity {
        CreateOpportunity {
            title: title.into(),
            description: "Help out".into(),
            location: "Leeds".into(),
            skills: vec!["Teamwork".into()],
            cause_areas: vec![],
            time_commitment: "2 hours".into(),
        }
    }

    #[tokio::test]
    async fn create_starts_as_draft_in_callers_partition() {
        let store = MemoryDocumentStore::new();
        let opp = create(&store, "org-1", input("Park tidy")).await.unwrap();

        assert_eq!(opp.status, OPPORTUNITY_DRAFT);
        assert_eq!(opp.organisation_id, "org-1");
        assert!(!opp.id.is_empty());
        assert!(find_for_organisation(&store, &opp.id, "org-1").await.unwrap().is_some());
        assert!(find_for_organisation(&store, &opp.id, "org-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let store = MemoryDocumentStore::new();
        assert_matches!(create(&store, "org-1", input("")).await, Err(AppError::Validation(_)));
    }

    #[tokio::test]
    async fn drafts_are_not_public() {
        let store = MemoryDocumentStore::new();
        let opp = create(&store, "org-1", input("Quiet draft")).await.unwrap();

        assert!(find_published(&store, &opp.id).await.unwrap().is_none());
        assert!(list_published(&store).await.unwrap().is_empty());

        let patch = UpdateOpportunity {
            status: Some(OPPORTUNITY_PUBLISHED.into()),
            ..Default::default()
        };
        update(&store, &opp.id, "org-1", patch).await.unwrap();

        assert!(find_published(&store, &opp.id).await.unwrap().is_some());
        assert_eq!(list_published(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn title_only_patch_leaves_other_fields() {
        let store = MemoryDocumentStore::new();
        let opp = create(&store, "org-1", input("Before")).await.unwrap();

        let patch = UpdateOpportunity {
            title: Some("After".into()),
            ..Default::default()
        };
        let updated = update(&store, &opp.id, "org-1", patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "After");
        assert_eq!(updated.description, opp.description);
        assert_eq!(updated.location, opp.location);
        assert_eq!(updated.skills, opp.skills);
        assert_eq!(updated.time_commitment, opp.time_commitment);
        assert_eq!(updated.status, opp.status);
        assert_eq!(updated.organisation_id, opp.organisation_id);
    }

    #[tokio::test]
    async fn update_in_another_partition_is_none() {
        let store = MemoryDocumentStore::new();
        let opp = create(&store, "org-1", input("Mine")).await.unwrap();

        let patch = UpdateOpportunity {
            title: Some("Theirs".into()),
            ..Default::default()
        };
        assert!(update(&store, &opp.id, "org-2", patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_rejects_unknown_status() {
        let store = MemoryDocumentStore::new();
        let opp = create(&store, "org-1", input("Status")).await.unwrap();

        let patch = UpdateOpportunity {
            status: Some("archived".into()),
            ..Default::default()
        };
        assert_matches!(
            update(&store, &opp.id, "org-1", patch).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[tokio::test]
    async fn organisation_listing_includes_drafts_only_from_that_partition() {
        let store = MemoryDocumentStore::new();
        create(&store, "org-1", input("One")).await.unwrap();
        create(&store, "org-1", input("Two")).await.unwrap();
        create(&store, "org-2", input("Other")).await.unwrap();

        assert_eq!(list_for_organisation(&store, "org-1").await.unwrap().len(), 2);
        assert_eq!(list_for_organisation(&store, "org-3").await.unwrap().len(), 0);
    }
}
