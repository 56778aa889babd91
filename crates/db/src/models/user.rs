//! User reference document.

use serde::{Deserialize, Serialize};
use voli_core::types::{DocId, Timestamp};

use super::document::Document;

/// A platform user. Partitioned by its own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DocId,
    pub email: String,
    pub name: String,
    /// One of `voli_core::roles`.
    pub role: String,
    /// Set for organisation members.
    #[serde(default)]
    pub organisation_id: Option<DocId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document for User {
    const CONTAINER: &'static str = "users";
    const PARTITION_KEY_PATH: &'static str = "/id";
    const ENTITY: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn partition_key(&self) -> &str {
        &self.id
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
