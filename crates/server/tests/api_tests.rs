//! Integration tests for the posts REST API.
//!
//! Run with: `cargo test -p server --features server --test api_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{delete, get, post_json, test_app, test_app_with_flags};
use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, CreatePostRequest, FeatureFlags, Post};

#[tokio::test]
async fn health_check_returns_ok() {
    let (app, _store) = test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
    assert!(body.contains("\"posts\":0"));
}

#[tokio::test]
async fn create_and_get_post() {
    let (app, _store) = test_app();

    let json = serde_json::json!({
        "title": "Hello",
        "categories": "rust, web",
        "content": "First!"
    });
    let (status, body) = post_json(&app, "/api/v1/posts", &json.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let post: Post = serde_json::from_str(&body).unwrap();
    assert_eq!(post.title, "Hello");
    assert_eq!(post.categories, "rust, web");
    assert_eq!(post.content, "First!");

    let (status, body) = get(&app, &format!("/api/v1/posts/{}", post.id)).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Post = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched, post);
}

#[tokio::test]
async fn create_with_missing_fields_is_unprocessable() {
    let (app, store) = test_app();

    let json = serde_json::json!({ "title": "Only a title" });
    let (status, body) = post_json(&app, "/api/v1/posts", &json.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.len(), 2);
    assert_eq!(err.field_errors["categories"], "Enter some categories");
    assert_eq!(err.field_errors["content"], "Enter some content please");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn blank_only_values_are_rejected() {
    let (app, _store) = test_app();

    let json = serde_json::json!({
        "title": "   ",
        "categories": "c",
        "content": "b"
    });
    let (status, body) = post_json(&app, "/api/v1/posts", &json.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    let fields: Vec<&str> = err.field_errors.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["title"]);
}

#[tokio::test]
async fn created_values_are_trimmed() {
    let (app, _store) = test_app();

    let json = serde_json::json!({
        "title": "  Spaced  ",
        "categories": "c",
        "content": "b"
    });
    let (status, body) = post_json(&app, "/api/v1/posts", &json.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let post: Post = serde_json::from_str(&body).unwrap();
    assert_eq!(post.title, "Spaced");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let (app, store) = test_app();
    for title in ["older", "newer"] {
        store
            .insert(CreatePostRequest {
                title: title.to_string(),
                categories: "c".to_string(),
                content: "b".to_string(),
            })
            .await;
    }

    let (status, body) = get(&app, "/api/v1/posts").await;
    assert_eq!(status, StatusCode::OK);
    let posts: Vec<Post> = serde_json::from_str(&body).unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["newer", "older"]);
}

#[tokio::test]
async fn get_unknown_post_is_not_found() {
    let (app, _store) = test_app();
    let (status, body) = get(
        &app,
        "/api/v1/posts/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn delete_post_then_404() {
    let (app, store) = test_app();
    let post = store
        .insert(CreatePostRequest {
            title: "t".to_string(),
            categories: "c".to_string(),
            content: "b".to_string(),
        })
        .await;

    let uri = format!("/api/v1/posts/{}", post.id);
    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_bad_request_app_error() {
    let (app, store) = test_app();

    let (status, body) = post_json(&app, "/api/v1/posts", r#"{"title": "unterminated"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(!err.message.is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn docs_mounted_when_flag_on() {
    let flags = FeatureFlags {
        docs: true,
        ..FeatureFlags::default()
    };
    let (app, _store) = test_app_with_flags(&flags);

    let (status, _body) = get(&app, "/docs").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn docs_absent_when_flag_off() {
    let (app, _store) = test_app();

    let (status, _body) = get(&app, "/docs").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
