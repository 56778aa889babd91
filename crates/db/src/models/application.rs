//! Application document and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;
use voli_core::types::{DocId, Timestamp};

use super::document::Document;

/// A student's request to take part in an opportunity.
///
/// Partitioned by `opportunityId`, so every point read needs the
/// opportunity the application was made against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: DocId,
    pub opportunity_id: DocId,
    pub student_user_id: DocId,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document for Application {
    const CONTAINER: &'static str = "applications";
    const PARTITION_KEY_PATH: &'static str = "/opportunityId";
    const ENTITY: &'static str = "Application";

    fn id(&self) -> &str {
        &self.id
    }

    fn partition_key(&self) -> &str {
        &self.opportunity_id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn set_created_at(&mut self, at: Timestamp) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

/// DTO for applying to an opportunity.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    #[validate(length(min = 1, message = "opportunityId is required"))]
    pub opportunity_id: DocId,
    pub message: Option<String>,
}

/// DTO for an organisation's decision on an application.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatus {
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}
