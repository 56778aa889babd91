//! HTTP-level integration tests for the public organisation directory.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, memory_store, post_empty};

#[tokio::test]
async fn test_list_organisations_is_public() {
    let store = memory_store();
    post_empty(build_test_app(store.clone()), "/api/seed").await;

    let response = get(build_test_app(store), "/api/organisations").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Green Future Initiative"));
    assert!(names.contains(&"Community Care Network"));
}

#[tokio::test]
async fn test_get_organisation_by_id() {
    let store = memory_store();
    post_empty(build_test_app(store.clone()), "/api/seed").await;

    let response = get(build_test_app(store), "/api/organisations/org-1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["website"], "https://greenfuture.example.com");
}

#[tokio::test]
async fn test_get_unknown_organisation_returns_404() {
    let response = get(build_test_app(memory_store()), "/api/organisations/org-404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
