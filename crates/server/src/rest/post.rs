use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use shared_types::{AppError, CreatePostRequest, Post};
use uuid::Uuid;

use crate::error_convert::ValidateRequest;
use crate::store::PostStore;

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "Posts, newest first", body = Vec<Post>)
    ),
    tag = "posts"
)]
#[tracing::instrument(skip(store))]
pub async fn list_posts(State(store): State<PostStore>) -> Json<Vec<Post>> {
    Json(store.list().await)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post found", body = Post),
        (status = 404, description = "Post not found", body = AppError)
    ),
    tag = "posts"
)]
#[tracing::instrument(skip(store))]
pub async fn get_post(
    State(store): State<PostStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, AppError> {
    store
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Post with id {} not found", id)))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Malformed JSON body", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "posts"
)]
#[tracing::instrument(skip(store, payload))]
pub async fn create_post(
    State(store): State<PostStore>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let Json(payload) = payload.map_err(|rej| AppError::bad_request(rej.body_text()))?;
    let payload = payload.normalized();
    payload.validate_request()?;

    let post = store.insert(payload).await;
    tracing::info!(post_id = %post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = AppError)
    ),
    tag = "posts"
)]
#[tracing::instrument(skip(store))]
pub async fn delete_post(
    State(store): State<PostStore>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Post with id {} not found", id)))
    }
}
