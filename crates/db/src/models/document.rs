//! The contract every stored entity fulfils.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use voli_core::types::{DocId, Timestamp};

/// A document living in one container, addressed by `(partition_key, id)`.
///
/// The partition key is derived from the document's own fields and must
/// never change once the document has been created.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Container (logical table) name.
    const CONTAINER: &'static str;
    /// JSON path of the partition key field, for logs and diagnostics.
    const PARTITION_KEY_PATH: &'static str;
    /// Entity name used in not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
    fn partition_key(&self) -> &str;
    fn created_at(&self) -> Timestamp;
    fn set_created_at(&mut self, at: Timestamp);
    fn set_updated_at(&mut self, at: Timestamp);
}

/// Generate a fresh document id.
pub fn new_document_id() -> DocId {
    Uuid::new_v4().to_string()
}
