//! Development fixture data.
//!
//! Every fixture has a fixed id and is written with an upsert, so seeding a
//! store twice leaves it in the same state as seeding it once.

use chrono::{Duration, Utc};
use serde::Serialize;
use voli_core::application::{APPLICATION_ACCEPTED, APPLICATION_SUBMITTED};
use voli_core::hours::{HOURS_APPROVED, HOURS_SUBMITTED};
use voli_core::opportunity::{OPPORTUNITY_DRAFT, OPPORTUNITY_PUBLISHED};
use voli_core::roles::{ROLE_ORGANISATION, ROLE_STUDENT};
use voli_core::types::Timestamp;
use voli_db::models::application::Application;
use voli_db::models::hours_log::HoursLog;
use voli_db::models::opportunity::Opportunity;
use voli_db::models::organisation::Organisation;
use voli_db::models::user::User;
use voli_db::repositories::{
    ApplicationRepo, HoursLogRepo, OpportunityRepo, OrganisationRepo, UserRepo,
};
use voli_db::DocumentStore;

use crate::error::AppResult;

const SEED_OPPORTUNITY_COUNT: u32 = 20;
/// Opportunities numbered up to this are published; the rest are drafts.
const SEED_LAST_PUBLISHED: u32 = 15;

/// How many documents of each kind a seed run wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub organisations: usize,
    pub users: usize,
    pub opportunities: usize,
    pub applications: usize,
    pub hours_logs: usize,
}

/// Write the full fixture set.
pub async fn seed(store: &dyn DocumentStore) -> AppResult<SeedSummary> {
    let now = Utc::now();
    let mut summary = SeedSummary::default();

    for organisation in organisations(now) {
        OrganisationRepo::upsert(store, organisation).await?;
        summary.organisations += 1;
    }
    for user in users(now) {
        UserRepo::upsert(store, user).await?;
        summary.users += 1;
    }
    for opportunity in opportunities(now) {
        OpportunityRepo::upsert(store, opportunity).await?;
        summary.opportunities += 1;
    }
    for application in applications(now) {
        ApplicationRepo::upsert(store, application).await?;
        summary.applications += 1;
    }
    for log in hours_logs(now) {
        HoursLogRepo::upsert(store, log).await?;
        summary.hours_logs += 1;
    }

    tracing::info!(
        organisations = summary.organisations,
        users = summary.users,
        opportunities = summary.opportunities,
        applications = summary.applications,
        hours_logs = summary.hours_logs,
        "Seed data written"
    );
    Ok(summary)
}

fn organisations(now: Timestamp) -> Vec<Organisation> {
    let org = |id: &str, name: &str, description: &str, website: &str| Organisation {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        website: Some(website.into()),
        logo_url: None,
        created_at: now,
        updated_at: now,
    };
    vec![
        org(
            "org-1",
            "Green Future Initiative",
            "Environmental conservation and sustainability",
            "https://greenfuture.example.com",
        ),
        org(
            "org-2",
            "Community Care Network",
            "Supporting local communities through various programs",
            "https://communitycare.example.com",
        ),
    ]
}

fn users(now: Timestamp) -> Vec<User> {
    let user = |id: &str, email: &str, name: &str, role: &str, org: Option<&str>| User {
        id: id.into(),
        email: email.into(),
        name: name.into(),
        role: role.into(),
        organisation_id: org.map(Into::into),
        created_at: now,
        updated_at: now,
    };
    vec![
        user("student-1", "student1@example.com", "Alice Student", ROLE_STUDENT, None),
        user("student-2", "student2@example.com", "Bob Student", ROLE_STUDENT, None),
        user(
            "org-user-1",
            "org@greenfuture.example.com",
            "Org Manager",
            ROLE_ORGANISATION,
            Some("org-1"),
        ),
    ]
}

fn opportunities(now: Timestamp) -> Vec<Opportunity> {
    (1..=SEED_OPPORTUNITY_COUNT)
        .map(|i| Opportunity {
            id: format!("opp-{i}"),
            organisation_id: if i % 2 == 0 { "org-1" } else { "org-2" }.into(),
            title: format!("Opportunity {i}"),
            description: format!("Description for opportunity {i}"),
            location: if i % 3 == 0 { "Remote" } else { "On-site" }.into(),
            skills: vec!["Communication".into(), "Teamwork".into()],
            cause_areas: vec!["Environment".into(), "Community".into()],
            time_commitment: "5-10 hours/week".into(),
            status: if i <= SEED_LAST_PUBLISHED {
                OPPORTUNITY_PUBLISHED
            } else {
                OPPORTUNITY_DRAFT
            }
            .into(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

fn applications(now: Timestamp) -> Vec<Application> {
    let app = |id: &str, opp: &str, student: &str, status: &str, message: Option<&str>| {
        Application {
            id: id.into(),
            opportunity_id: opp.into(),
            student_user_id: student.into(),
            status: status.into(),
            message: message.map(Into::into),
            created_at: now,
            updated_at: now,
        }
    };
    vec![
        app(
            "app-1",
            "opp-1",
            "student-1",
            APPLICATION_SUBMITTED,
            Some("I'm interested in this opportunity!"),
        ),
        app(
            "app-2",
            "opp-1",
            "student-2",
            APPLICATION_ACCEPTED,
            Some("Looking forward to contributing"),
        ),
        app("app-3", "opp-2", "student-1", APPLICATION_SUBMITTED, None),
    ]
}

fn hours_logs(now: Timestamp) -> Vec<HoursLog> {
    vec![
        HoursLog {
            id: "hours-1".into(),
            organisation_id: "org-1".into(),
            opportunity_id: "opp-1".into(),
            student_user_id: "student-1".into(),
            date: now - Duration::days(7),
            minutes: 240,
            notes: Some("Helped with event setup".into()),
            status: HOURS_APPROVED.into(),
            reviewed_by_user_id: Some("org-user-1".into()),
            created_at: now,
            updated_at: now,
        },
        HoursLog {
            id: "hours-2".into(),
            organisation_id: "org-1".into(),
            opportunity_id: "opp-1".into(),
            student_user_id: "student-1".into(),
            date: now - Duration::days(3),
            minutes: 180,
            notes: Some("Attended volunteer meeting".into()),
            status: HOURS_SUBMITTED.into(),
            reviewed_by_user_id: None,
            created_at: now,
            updated_at: now,
        },
    ]
}
