//! Shared query parameter types for API handlers.
//!
//! Partitioned documents are addressed by id *and* partition key; handlers
//! take the partition key from the query string with these types.

use serde::Deserialize;
use voli_core::types::DocId;

use crate::error::AppError;

/// `?opportunityId=` -- the partition key of an application.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityScope {
    pub opportunity_id: Option<DocId>,
}

impl OpportunityScope {
    /// The opportunity id, or 400 when it is missing or empty.
    pub fn require(self) -> Result<DocId, AppError> {
        required(self.opportunity_id, "opportunityId")
    }
}

/// `?organisationId=` -- the partition key of an hours log.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationScope {
    pub organisation_id: Option<DocId>,
}

impl OrganisationScope {
    /// The organisation id, or 400 when it is missing or empty.
    pub fn require(self) -> Result<DocId, AppError> {
        required(self.organisation_id, "organisationId")
    }
}

fn required(value: Option<DocId>, name: &str) -> Result<DocId, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{name} query parameter is required")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn present_value_is_returned() {
        let scope = OpportunityScope {
            opportunity_id: Some("opp-1".into()),
        };
        assert_eq!(scope.require().unwrap(), "opp-1");
    }

    #[test]
    fn missing_or_blank_value_is_bad_request() {
        let missing = OrganisationScope {
            organisation_id: None,
        };
        assert_matches!(
            missing.require(),
            Err(AppError::BadRequest(msg)) if msg == "organisationId query parameter is required"
        );

        let blank = OrganisationScope {
            organisation_id: Some("  ".into()),
        };
        assert_matches!(blank.require(), Err(AppError::BadRequest(_)));
    }
}
