/// Document ids are opaque strings (UUID v4 for server-created documents,
/// fixed slugs for seed fixtures).
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
