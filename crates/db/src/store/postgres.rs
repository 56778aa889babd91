//! [`DocumentStore`] backed by a single Postgres `documents` table.
//!
//! Documents are stored as JSONB keyed by `(container, partition_key, id)`;
//! see `migrations/` for the schema.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::{DocumentStore, StoreError, StoreResult};

/// Postgres-backed document store.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a unique-key violation on insert into [`StoreError::Conflict`].
fn map_insert_error(err: sqlx::Error, container: &str, partition_key: &str, id: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Conflict {
            container: container.to_string(),
            partition_key: partition_key.to_string(),
            id: id.to_string(),
        },
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn read(
        &self,
        container: &str,
        id: &str,
        partition_key: &str,
    ) -> StoreResult<Option<Value>> {
        let body = sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents
             WHERE container = $1 AND partition_key = $2 AND id = $3",
        )
        .bind(container)
        .bind(partition_key)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(body)
    }

    async fn query_partition(
        &self,
        container: &str,
        partition_key: &str,
    ) -> StoreResult<Vec<Value>> {
        let bodies = sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents
             WHERE container = $1 AND partition_key = $2
             ORDER BY created_at, id",
        )
        .bind(container)
        .bind(partition_key)
        .fetch_all(&self.pool)
        .await?;
        Ok(bodies)
    }

    async fn query_field(
        &self,
        container: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Vec<Value>> {
        let bodies = sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents
             WHERE container = $1 AND body ->> $2::text = $3
             ORDER BY created_at, id",
        )
        .bind(container)
        .bind(field)
        .bind(value)
        .fetch_all(&self.pool)
        .await?;
        Ok(bodies)
    }

    async fn query_all(&self, container: &str) -> StoreResult<Vec<Value>> {
        let bodies = sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents WHERE container = $1 ORDER BY created_at, id",
        )
        .bind(container)
        .fetch_all(&self.pool)
        .await?;
        Ok(bodies)
    }

    async fn create(
        &self,
        container: &str,
        partition_key: &str,
        id: &str,
        body: Value,
    ) -> StoreResult<Value> {
        sqlx::query_scalar::<_, Value>(
            "INSERT INTO documents (container, partition_key, id, body)
             VALUES ($1, $2, $3, $4)
             RETURNING body",
        )
        .bind(container)
        .bind(partition_key)
        .bind(id)
        .bind(&body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, container, partition_key, id))
    }

    async fn upsert(
        &self,
        container: &str,
        partition_key: &str,
        id: &str,
        body: Value,
    ) -> StoreResult<Value> {
        let stored = sqlx::query_scalar::<_, Value>(
            "INSERT INTO documents (container, partition_key, id, body)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (container, partition_key, id)
             DO UPDATE SET body = EXCLUDED.body, updated_at = NOW()
             RETURNING body",
        )
        .bind(container)
        .bind(partition_key)
        .bind(id)
        .bind(&body)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn replace(
        &self,
        container: &str,
        id: &str,
        partition_key: &str,
        body: Value,
    ) -> StoreResult<Option<Value>> {
        let stored = sqlx::query_scalar::<_, Value>(
            "UPDATE documents SET body = $4, updated_at = NOW()
             WHERE container = $1 AND partition_key = $2 AND id = $3
             RETURNING body",
        )
        .bind(container)
        .bind(partition_key)
        .bind(id)
        .bind(&body)
        .fetch_optional(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn delete(&self, container: &str, id: &str, partition_key: &str) -> StoreResult<bool> {
        let result = sqlx::query(
            "DELETE FROM documents
             WHERE container = $1 AND partition_key = $2 AND id = $3",
        )
        .bind(container)
        .bind(partition_key)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
