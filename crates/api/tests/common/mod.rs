#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use voli_api::auth::jwt::{encode_token, Claims, JwtConfig};
use voli_api::config::{AppEnvironment, SeedConfig, ServerConfig};
use voli_api::router::build_app_router;
use voli_api::state::AppState;
use voli_db::{MemoryDocumentStore, Store};

pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults: development environment,
/// seeding enabled without a secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        environment: AppEnvironment::Development,
        database_url: None,
        database_max_connections: 1,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            issuer: None,
            audience: None,
            access_token_expiry_mins: 15,
        },
        seed: SeedConfig {
            allow_seeding: true,
            secret: None,
        },
    }
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Store {
    Arc::new(MemoryDocumentStore::new())
}

/// Build the full application router over `store`, using the same builder
/// (and therefore the same middleware stack) as `main.rs`.
pub fn build_test_app(store: Store) -> Router {
    build_app_with_config(store, test_config())
}

pub fn build_app_with_config(store: Store, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_for(claims: &Claims) -> String {
    encode_token(claims, &test_config().jwt).expect("test token should encode")
}

pub fn claims(user_id: &str, role: &str) -> Claims {
    Claims::new(user_id, role, &test_config().jwt)
}

pub fn student_token(user_id: &str) -> String {
    token_for(&claims(user_id, "student"))
}

pub fn organisation_token(user_id: &str, organisation_id: &str) -> String {
    token_for(&claims(user_id, "organisation").with_organisation(organisation_id))
}

pub fn admin_token(user_id: &str) -> String {
    token_for(&claims(user_id, "admin"))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), None).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
