//! Organisation reference document.

use serde::{Deserialize, Serialize};
use voli_core::types::{DocId, Timestamp};

use super::document::Document;

/// An organisation posting opportunities. Partitioned by its own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    pub id: DocId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document for Organisation {
    const CONTAINER: &'static str = "organisations";
    const PARTITION_KEY_PATH: &'static str = "/id";
    const ENTITY: &'static str = "Organisation";

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
