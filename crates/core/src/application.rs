//! Application status vocabulary.
//!
//! An application starts as `submitted`. The owning organisation moves it to
//! `accepted` or `rejected`; the student may move it to `withdrawn`. No
//! transition is treated as terminal.

use crate::error::CoreError;

pub const APPLICATION_SUBMITTED: &str = "submitted";
pub const APPLICATION_WITHDRAWN: &str = "withdrawn";
pub const APPLICATION_ACCEPTED: &str = "accepted";
pub const APPLICATION_REJECTED: &str = "rejected";

pub const VALID_APPLICATION_STATUSES: &[&str] = &[
    APPLICATION_SUBMITTED,
    APPLICATION_WITHDRAWN,
    APPLICATION_ACCEPTED,
    APPLICATION_REJECTED,
];

/// Validate that an application status string is one of the accepted values.
pub fn validate_application_status(status: &str) -> Result<(), CoreError> {
    if VALID_APPLICATION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid application status '{status}'. Must be one of: {}",
            VALID_APPLICATION_STATUSES.join(", ")
        )))
    }
}
