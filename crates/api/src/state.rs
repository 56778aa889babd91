use std::sync::Arc;

use voli_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store (Postgres-backed or in-memory).
    pub store: Store,
    /// Server configuration (JWT verification, seeding gates).
    pub config: Arc<ServerConfig>,
}
