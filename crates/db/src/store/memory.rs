//! In-process [`DocumentStore`] used for local development and tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError, StoreResult};

/// Documents of one container keyed by `(partition_key, id)`.
type Partitions = BTreeMap<(String, String), Value>;

/// A [`DocumentStore`] held entirely in memory.
///
/// Nothing is persisted; dropping the store drops every document.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    containers: RwLock<HashMap<String, Partitions>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `container`.
    pub async fn len(&self, container: &str) -> usize {
        self.containers
            .read()
            .await
            .get(container)
            .map_or(0, BTreeMap::len)
    }
}

fn key(partition_key: &str, id: &str) -> (String, String) {
    (partition_key.to_string(), id.to_string())
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn read(
        &self,
        container: &str,
        id: &str,
        partition_key: &str,
    ) -> StoreResult<Option<Value>> {
        let containers = self.containers.read().await;
        Ok(containers
            .get(container)
            .and_then(|docs| docs.get(&key(partition_key, id)))
            .cloned())
    }

    async fn query_partition(
        &self,
        container: &str,
        partition_key: &str,
    ) -> StoreResult<Vec<Value>> {
        let containers = self.containers.read().await;
        Ok(containers
            .get(container)
            .map(|docs| {
                docs.iter()
                    .filter(|((pk, _), _)| pk == partition_key)
                    .map(|(_, doc)| doc.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query_field(
        &self,
        container: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Vec<Value>> {
        let containers = self.containers.read().await;
        Ok(containers
            .get(container)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(field).and_then(Value::as_str) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query_all(&self, container: &str) -> StoreResult<Vec<Value>> {
        let containers = self.containers.read().await;
        Ok(containers
            .get(container)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn create(
        &self,
        container: &str,
        partition_key: &str,
        id: &str,
        body: Value,
    ) -> StoreResult<Value> {
        let mut containers = self.containers.write().await;
        let docs = containers.entry(container.to_string()).or_default();
        let k = key(partition_key, id);
        if docs.contains_key(&k) {
            return Err(StoreError::Conflict {
                container: container.to_string(),
                partition_key: partition_key.to_string(),
                id: id.to_string(),
            });
        }
        docs.insert(k, body.clone());
        Ok(body)
    }

    async fn upsert(
        &self,
        container: &str,
        partition_key: &str,
        id: &str,
        body: Value,
    ) -> StoreResult<Value> {
        let mut containers = self.containers.write().await;
        containers
            .entry(container.to_string())
            .or_default()
            .insert(key(partition_key, id), body.clone());
        Ok(body)
    }

    async fn replace(
        &self,
        container: &str,
        id: &str,
        partition_key: &str,
        body: Value,
    ) -> StoreResult<Option<Value>> {
        let mut containers = self.containers.write().await;
        let Some(existing) = containers
            .get_mut(container)
            .and_then(|docs| docs.get_mut(&key(partition_key, id)))
        else {
            return Ok(None);
        };
        *existing = body.clone();
        Ok(Some(body))
    }

    async fn delete(&self, container: &str, id: &str, partition_key: &str) -> StoreResult<bool> {
        let mut containers = self.containers.write().await;
        Ok(containers
            .get_mut(container)
            .and_then(|docs| docs.remove(&key(partition_key, id)))
            .is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
