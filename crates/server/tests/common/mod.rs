use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::store::PostStore;
use shared_types::FeatureFlags;
use tower::ServiceExt;

/// Build the API router over a fresh store with every flag off.
/// Returns the store too so tests can seed or inspect it directly.
pub fn test_app() -> (Router, PostStore) {
    test_app_with_flags(&FeatureFlags::default())
}

pub fn test_app_with_flags(flags: &FeatureFlags) -> (Router, PostStore) {
    let store = PostStore::new();
    let router = server::openapi::api_router_with_flags(store.clone(), flags);
    (router, store)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
/// Helper to make a DELETE request.
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, String) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}
