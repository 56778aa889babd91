//! Hours log status vocabulary.
//!
//! A log is `submitted` by a student and reviewed by an organisation member,
//! becoming `approved` or `rejected`. Every review stamps the reviewer's
//! user id.

pub const HOURS_SUBMITTED: &str = "submitted";
pub const HOURS_APPROVED: &str = "approved";
pub const HOURS_REJECTED: &str = "rejected";
