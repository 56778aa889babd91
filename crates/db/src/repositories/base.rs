//! Operations shared by every [`Document`] type.
//!
//! These translate typed documents to and from the JSON the store holds and
//! stamp `createdAt` / `updatedAt` on writes.

use chrono::Utc;
use serde_json::Value;

use crate::models::document::Document;
use crate::store::{DocumentStore, StoreError};

fn decode<T: Document>(value: Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(value)?)
}

fn decode_all<T: Document>(values: Vec<Value>) -> Result<Vec<T>, StoreError> {
    values.into_iter().map(decode).collect()
}

/// Point read by id and partition key.
pub async fn find<T: Document>(
    store: &dyn DocumentStore,
    id: &str,
    partition_key: &str,
) -> Result<Option<T>, StoreError> {
    let found = store.read(T::CONTAINER, id, partition_key).await?;
    if found.is_none() {
        tracing::debug!(
            container = T::CONTAINER,
            id,
            partition_key,
            "Document not found"
        );
    }
    found.map(decode).transpose()
}

/// All documents in one partition.
pub async fn list_partition<T: Document>(
    store: &dyn DocumentStore,
    partition_key: &str,
) -> Result<Vec<T>, StoreError> {
    let docs = decode_all(store.query_partition(T::CONTAINER, partition_key).await?)?;
    tracing::debug!(
        container = T::CONTAINER,
        partition_key_path = T::PARTITION_KEY_PATH,
        partition_key,
        count = docs.len(),
        "Listed partition"
    );
    Ok(docs)
}

/// All documents in the container.
pub async fn list_all<T: Document>(store: &dyn DocumentStore) -> Result<Vec<T>, StoreError> {
    decode_all(store.query_all(T::CONTAINER).await?)
}

/// Cross-partition equality filter on a top-level string field.
pub async fn list_where<T: Document>(
    store: &dyn DocumentStore,
    field: &str,
    value: &str,
) -> Result<Vec<T>, StoreError> {
    decode_all(store.query_field(T::CONTAINER, field, value).await?)
}

/// Insert a new document, stamping both timestamps.
pub async fn create<T: Document>(store: &dyn DocumentStore, mut doc: T) -> Result<T, StoreError> {
    let now = Utc::now();
    doc.set_created_at(now);
    doc.set_updated_at(now);

    let body = serde_json::to_value(&doc)?;
    let stored = store
        .create(T::CONTAINER, doc.partition_key(), doc.id(), body)
        .await?;
    tracing::debug!(
        container = T::CONTAINER,
        id = doc.id(),
        partition_key = doc.partition_key(),
        "Document created"
    );
    decode(stored)
}

/// Insert or overwrite a document. A new document gets both timestamps; an
/// overwrite keeps the stored `createdAt` and only refreshes `updatedAt`.
pub async fn upsert<T: Document>(store: &dyn DocumentStore, mut doc: T) -> Result<T, StoreError> {
    let now = Utc::now();
    let created_at = match store.read(T::CONTAINER, doc.id(), doc.partition_key()).await? {
        Some(existing) => decode::<T>(existing)?.created_at(),
        None => now,
    };
    doc.set_created_at(created_at);
    doc.set_updated_at(now);

    let body = serde_json::to_value(&doc)?;
    let stored = store
        .upsert(T::CONTAINER, doc.partition_key(), doc.id(), body)
        .await?;
    decode(stored)
}

/// Replace an existing document under its own partition key, stamping
/// `updatedAt`. `None` if the document no longer exists.
pub async fn replace<T: Document>(
    store: &dyn DocumentStore,
    mut doc: T,
) -> Result<Option<T>, StoreError> {
    doc.set_updated_at(Utc::now());

    let body = serde_json::to_value(&doc)?;
    let stored = store
        .replace(T::CONTAINER, doc.id(), doc.partition_key(), body)
        .await?;
    tracing::debug!(
        container = T::CONTAINER,
        id = doc.id(),
        partition_key = doc.partition_key(),
        replaced = stored.is_some(),
        "Document replace"
    );
    stored.map(decode).transpose()
}

/// Delete by id and partition key. Returns `true` if a document was removed.
pub async fn delete<T: Document>(
    store: &dyn DocumentStore,
    id: &str,
    partition_key: &str,
) -> Result<bool, StoreError> {
    store.delete(T::CONTAINER, id, partition_key).await
}
