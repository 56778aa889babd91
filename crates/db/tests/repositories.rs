//! Integration tests for the typed repositories.
//!
//! Exercises partition semantics end to end against the in-memory store:
//! - point reads need the right partition key
//! - partition listings do not leak across partitions
//! - cross-partition filters (published, by student, by email)
//! - timestamp stamping on create and replace

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use voli_db::models::application::Application;
use voli_db::models::hours_log::HoursLog;
use voli_db::models::opportunity::Opportunity;
use voli_db::models::organisation::Organisation;
use voli_db::models::user::User;
use voli_db::repositories::{
    ApplicationRepo, HoursLogRepo, OpportunityRepo, OrganisationRepo, UserRepo,
};
use voli_db::{MemoryDocumentStore, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn organisation(id: &str, name: &str) -> Organisation {
    let now = Utc::now();
    Organisation {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        website: None,
        logo_url: None,
        created_at: now,
        updated_at: now,
    }
}

fn opportunity(id: &str, organisation_id: &str, status: &str) -> Opportunity {
    let epoch = Utc::now() - Duration::days(30);
    Opportunity {
        id: id.to_string(),
        organisation_id: organisation_id.to_string(),
        title: format!("Opportunity {id}"),
        description: String::new(),
        location: "Remote".to_string(),
        skills: vec![],
        cause_areas: vec![],
        time_commitment: "1 hour/week".to_string(),
        status: status.to_string(),
        created_at: epoch,
        updated_at: epoch,
    }
}

fn application(id: &str, opportunity_id: &str, student: &str) -> Application {
    let now = Utc::now();
    Application {
        id: id.to_string(),
        opportunity_id: opportunity_id.to_string(),
        student_user_id: student.to_string(),
        status: "submitted".to_string(),
        message: None,
        created_at: now,
        updated_at: now,
    }
}

fn hours_log(id: &str, organisation_id: &str, student: &str) -> HoursLog {
    let now = Utc::now();
    HoursLog {
        id: id.to_string(),
        organisation_id: organisation_id.to_string(),
        opportunity_id: "opp-1".to_string(),
        student_user_id: student.to_string(),
        date: now,
        minutes: 90,
        notes: None,
        status: "submitted".to_string(),
        reviewed_by_user_id: None,
        created_at: now,
        updated_at: now,
    }
}

// ---------------------------------------------------------------------------
// Opportunities
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_stamps_timestamps() {
    let store = MemoryDocumentStore::new();
    let before = Utc::now();

    let created = OpportunityRepo::create(&store, opportunity("opp-1", "org-1", "draft"))
        .await
        .unwrap();

    assert!(created.created_at >= before);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn find_with_wrong_partition_returns_none() {
    let store = MemoryDocumentStore::new();
    OpportunityRepo::create(&store, opportunity("opp-1", "org-1", "draft"))
        .await
        .unwrap();

    assert!(OpportunityRepo::find_by_id(&store, "opp-1", "org-1")
        .await
        .unwrap()
        .is_some());
    assert!(OpportunityRepo::find_by_id(&store, "opp-1", "org-2")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn list_published_spans_organisations() {
    let store = MemoryDocumentStore::new();
    for (id, org, status) in [
        ("opp-1", "org-1", "published"),
        ("opp-2", "org-2", "published"),
        ("opp-3", "org-2", "draft"),
        ("opp-4", "org-1", "closed"),
    ] {
        OpportunityRepo::create(&store, opportunity(id, org, status))
            .await
            .unwrap();
    }

    let published = OpportunityRepo::list_published(&store).await.unwrap();
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|o| o.status == "published"));

    let org_two = OpportunityRepo::list_by_organisation(&store, "org-2")
        .await
        .unwrap();
    assert_eq!(org_two.len(), 2);
    assert!(org_two.iter().all(|o| o.organisation_id == "org-2"));
}

#[tokio::test]
async fn find_any_partition_locates_document() {
    let store = MemoryDocumentStore::new();
    OpportunityRepo::create(&store, opportunity("opp-7", "org-3", "draft"))
        .await
        .unwrap();

    let found = OpportunityRepo::find_by_id_any_partition(&store, "opp-7")
        .await
        .unwrap()
        .expect("should find across partitions");
    assert_eq!(found.organisation_id, "org-3");

    assert!(OpportunityRepo::find_by_id_any_partition(&store, "opp-8")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn replace_updates_timestamp_but_keeps_created_at() {
    let store = MemoryDocumentStore::new();
    let created = OpportunityRepo::create(&store, opportunity("opp-1", "org-1", "draft"))
        .await
        .unwrap();

    let mut changed = created.clone();
    changed.title = "Renamed".to_string();
    let replaced = OpportunityRepo::replace(&store, changed)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.title, "Renamed");
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at >= created.updated_at);
}

#[tokio::test]
async fn replace_of_deleted_document_returns_none() {
    let store = MemoryDocumentStore::new();
    let created = ApplicationRepo::create(&store, application("app-1", "opp-1", "student-1"))
        .await
        .unwrap();
    assert!(ApplicationRepo::delete(&store, "app-1", "opp-1").await.unwrap());

    assert!(ApplicationRepo::replace(&store, created).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_create_is_a_conflict() {
    let store = MemoryDocumentStore::new();
    OpportunityRepo::create(&store, opportunity("opp-1", "org-1", "draft"))
        .await
        .unwrap();

    let result = OpportunityRepo::create(&store, opportunity("opp-1", "org-1", "draft")).await;
    assert_matches!(result, Err(StoreError::Conflict { .. }));
}

// ---------------------------------------------------------------------------
// Applications and hours logs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn applications_partition_by_opportunity_and_filter_by_student() {
    let store = MemoryDocumentStore::new();
    ApplicationRepo::create(&store, application("app-1", "opp-1", "student-1"))
        .await
        .unwrap();
    ApplicationRepo::create(&store, application("app-2", "opp-1", "student-2"))
        .await
        .unwrap();
    ApplicationRepo::create(&store, application("app-3", "opp-2", "student-1"))
        .await
        .unwrap();

    let for_opp = ApplicationRepo::list_by_opportunity(&store, "opp-1")
        .await
        .unwrap();
    assert_eq!(for_opp.len(), 2);

    let mine = ApplicationRepo::list_by_student(&store, "student-1")
        .await
        .unwrap();
    let mut ids: Vec<_> = mine.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["app-1", "app-3"]);
}

#[tokio::test]
async fn hours_logs_partition_by_organisation() {
    let store = MemoryDocumentStore::new();
    HoursLogRepo::create(&store, hours_log("hours-1", "org-1", "student-1"))
        .await
        .unwrap();
    HoursLogRepo::create(&store, hours_log("hours-2", "org-2", "student-1"))
        .await
        .unwrap();

    assert_eq!(
        HoursLogRepo::list_by_organisation(&store, "org-1")
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        HoursLogRepo::list_by_student(&store, "student-1")
            .await
            .unwrap()
            .len(),
        2
    );
    assert!(HoursLogRepo::find_by_id(&store, "hours-2", "org-1")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Reference documents
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reference_documents_partition_by_own_id() {
    let store = MemoryDocumentStore::new();
    let now = Utc::now();
    OrganisationRepo::upsert(&store, organisation("org-1", "Green Future Initiative"))
        .await
        .unwrap();
    UserRepo::upsert(
        &store,
        User {
            id: "student-1".to_string(),
            email: "student1@example.com".to_string(),
            name: "Alice Student".to_string(),
            role: "student".to_string(),
            organisation_id: None,
            created_at: now,
            updated_at: now,
        },
    )
    .await
    .unwrap();

    assert!(OrganisationRepo::find_by_id(&store, "org-1").await.unwrap().is_some());
    assert_eq!(OrganisationRepo::list(&store).await.unwrap().len(), 1);

    let by_email = UserRepo::find_by_email(&store, "student1@example.com")
        .await
        .unwrap()
        .expect("user should be found by email");
    assert_eq!(by_email.id, "student-1");
    assert!(UserRepo::find_by_email(&store, "nobody@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn upsert_overwrite_keeps_created_at() {
    let store = MemoryDocumentStore::new();
    let first = OrganisationRepo::upsert(&store, organisation("org-1", "Green Future Initiative"))
        .await
        .unwrap();

    // A fresh document with a later createdAt, as a re-run seed would send.
    let second = OrganisationRepo::upsert(&store, organisation("org-1", "Green Future Trust"))
        .await
        .unwrap();

    assert_eq!(second.name, "Green Future Trust");
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);

    let stored = OrganisationRepo::find_by_id(&store, "org-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.created_at, first.created_at);
}
