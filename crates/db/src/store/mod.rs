//! The document store abstraction.
//!
//! A store holds JSON documents in named containers. Each container is
//! partitioned: a document is addressed by its partition key *and* its id,
//! and point operations with the wrong partition key behave as if the
//! document did not exist. Typed access lives in
//! [`crate::repositories`]; this layer only moves `serde_json::Value`s.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Shared handle to whichever store the server was started with.
pub type Store = Arc<dyn DocumentStore>;

/// Errors raised by a [`DocumentStore`] or while decoding its documents.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A create collided with an existing `(partition_key, id)` pair.
    #[error("Document {id} already exists in {container} partition {partition_key}")]
    Conflict {
        container: String,
        partition_key: String,
        id: String,
    },

    /// A stored document did not match the expected shape (or vice versa).
    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Partitioned JSON document storage.
///
/// Listing order is implementation-defined; callers must not rely on it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point read. `None` if no document has this id in this partition.
    async fn read(&self, container: &str, id: &str, partition_key: &str)
        -> StoreResult<Option<Value>>;

    /// Every document in one partition.
    async fn query_partition(&self, container: &str, partition_key: &str)
        -> StoreResult<Vec<Value>>;

    /// Cross-partition equality filter on a top-level string field.
    async fn query_field(&self, container: &str, field: &str, value: &str)
        -> StoreResult<Vec<Value>>;

    /// Every document in the container, across all partitions.
    async fn query_all(&self, container: &str) -> StoreResult<Vec<Value>>;

    /// Insert a new document. Fails with [`StoreError::Conflict`] if the id
    /// is already taken within the partition.
    async fn create(
        &self,
        container: &str,
        partition_key: &str,
        id: &str,
        body: Value,
    ) -> StoreResult<Value>;

    /// Insert or overwrite.
    async fn upsert(
        &self,
        container: &str,
        partition_key: &str,
        id: &str,
        body: Value,
    ) -> StoreResult<Value>;

    /// Overwrite an existing document. `None` if it does not exist.
    async fn replace(
        &self,
        container: &str,
        id: &str,
        partition_key: &str,
        body: Value,
    ) -> StoreResult<Option<Value>>;

    /// Remove a document. Returns `true` if one was removed.
    async fn delete(&self, container: &str, id: &str, partition_key: &str) -> StoreResult<bool>;

    /// Liveness probe for health checks.
    async fn ping(&self) -> StoreResult<()>;
}
