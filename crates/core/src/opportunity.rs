//! Opportunity status vocabulary.

use crate::error::CoreError;

/// Not yet visible to students.
pub const OPPORTUNITY_DRAFT: &str = "draft";

/// Listed on the public board.
pub const OPPORTUNITY_PUBLISHED: &str = "published";

/// No longer accepting applications.
pub const OPPORTUNITY_CLOSED: &str = "closed";

pub const VALID_OPPORTUNITY_STATUSES: &[&str] =
    &[OPPORTUNITY_DRAFT, OPPORTUNITY_PUBLISHED, OPPORTUNITY_CLOSED];

/// Validate that an opportunity status string is one of the accepted values.
pub fn validate_opportunity_status(status: &str) -> Result<(), CoreError> {
    if VALID_OPPORTUNITY_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid opportunity status '{status}'. Must be one of: {}",
            VALID_OPPORTUNITY_STATUSES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_statuses() {
        for status in VALID_OPPORTUNITY_STATUSES {
            assert!(validate_opportunity_status(status).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_status_with_message() {
        let err = validate_opportunity_status("archived").unwrap_err();
        assert!(err.to_string().contains("archived"));
        assert!(err.to_string().contains("draft, published, closed"));
    }

    #[test]
    fn status_match_is_case_sensitive() {
        assert!(validate_opportunity_status("Published").is_err());
    }
}
