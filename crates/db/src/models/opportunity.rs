//! Opportunity document and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;
use voli_core::types::{DocId, Timestamp};

use super::document::Document;

/// A volunteer engagement posted by an organisation.
///
/// Partitioned by `organisationId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: DocId,
    pub organisation_id: DocId,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub cause_areas: Vec<String>,
    pub time_commitment: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document for Opportunity {
    const CONTAINER: &'static str = "opportunities";
    const PARTITION_KEY_PATH: &'static str = "/organisationId";
    const ENTITY: &'static str = "Opportunity";

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

impl Opportunity {
    /// Overwrite every field that is present in `patch`; absent fields keep
    /// their stored value. The partition key is not patchable.
    pub fn apply_update(&mut self, patch: UpdateOpportunity) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(cause_areas) = patch.cause_areas {
            self.cause_areas = cause_areas;
        }
        if let Some(time_commitment) = patch.time_commitment {
            self.time_commitment = time_commitment;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// DTO for posting a new opportunity.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpportunity {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub cause_areas: Vec<String>,
    #[serde(default)]
    pub time_commitment: String,
}

/// DTO for patching an opportunity. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpportunity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub cause_areas: Option<Vec<String>>,
    pub time_commitment: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample() -> Opportunity {
        let now = Utc::now();
        Opportunity {
            id: "opp-1".into(),
            organisation_id: "org-1".into(),
            title: "Beach clean".into(),
            description: "Pick up litter".into(),
            location: "Brighton".into(),
            skills: vec!["Teamwork".into()],
            cause_areas: vec!["Environment".into()],
            time_commitment: "2 hours".into(),
            status: "draft".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut opp = sample();
        let before = opp.clone();
        opp.apply_update(UpdateOpportunity::default());
        assert_eq!(opp, before);
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut opp = sample();
        opp.apply_update(UpdateOpportunity {
            title: Some("River clean".into()),
            skills: Some(vec![]),
            ..Default::default()
        });

        assert_eq!(opp.title, "River clean");
        assert!(opp.skills.is_empty());
        assert_eq!(opp.description, "Pick up litter");
        assert_eq!(opp.cause_areas, vec!["Environment".to_string()]);
        assert_eq!(opp.status, "draft");
        assert_eq!(opp.organisation_id, "org-1");
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["organisationId"], "org-1");
        assert_eq!(json["causeAreas"][0], "Environment");
        assert_eq!(json["timeCommitment"], "2 hours");
        assert!(json.get("organisation_id").is_none());
    }

    #[test]
    fn create_requires_title() {
        let input: CreateOpportunity = serde_json::from_value(serde_json::json!({
            "title": "",
            "description": "x"
        }))
        .unwrap();
        assert!(input.validate().is_err());

        let input: CreateOpportunity =
            serde_json::from_value(serde_json::json!({"title": "Tutor"})).unwrap();
        assert!(input.validate().is_ok());
        assert!(input.skills.is_empty());
    }
}
