//! Hours log document and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use voli_core::types::{DocId, Timestamp};

use super::document::Document;

/// Time a student volunteered, awaiting or carrying an organisation review.
///
/// Partitioned by `organisationId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursLog {
    pub id: DocId,
    pub organisation_id: DocId,
    pub opportunity_id: DocId,
    pub student_user_id: DocId,
    pub date: Timestamp,
    pub minutes: i32,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
    #[serde(default)]
    pub reviewed_by_user_id: Option<DocId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document for HoursLog {
    const CONTAINER: &'static str = "hoursLogs";
    const PARTITION_KEY_PATH: &'static str = "/organisationId";
    const ENTITY: &'static str = "HoursLog";

    fn id(&self) -> &str {
        &self.id
    }

    fn partition_key(&self) -> &str {
        &self.organisation_id
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

/// DTO for logging volunteered time.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHoursLog {
    #[validate(length(min = 1, message = "organisationId is required"))]
    pub organisation_id: DocId,
    #[validate(length(min = 1, message = "opportunityId is required"))]
    pub opportunity_id: DocId,
    #[serde(deserialize_with = "deserialize_log_date")]
    pub date: Timestamp,
    #[validate(range(min = 0, message = "minutes must not be negative"))]
    pub minutes: i32,
    pub notes: Option<String>,
}

/// Accept an RFC 3339 timestamp or a bare `YYYY-MM-DD` day (midnight UTC).
fn deserialize_log_date<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            serde::de::Error::custom(format!(
                "date must be YYYY-MM-DD or an RFC 3339 timestamp, got {raw:?}"
            ))
        })
}
