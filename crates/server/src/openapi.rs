use axum::Router;
use shared_types::{AppError, AppErrorKind, CreatePostRequest, FeatureFlags, Post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, HealthResponse};
use crate::rest;
use crate::store::{AppState, PostStore};

#[derive(OpenApi)]
#[openapi(
    info(title = "Posts API", description = "Create and browse blog posts"),
    paths(
        rest::post::list_posts,
        rest::post::get_post,
        rest::post::create_post,
        rest::post::delete_post,
        health::health_check,
    ),
    components(schemas(Post, CreatePostRequest, AppError, AppErrorKind, HealthResponse)),
    tags(
        (name = "posts", description = "Blog posts"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// REST routes plus `/health`, with state attached, gated by the loaded
/// feature flags.
pub fn api_router(store: PostStore) -> Router {
    api_router_with_flags(store, crate::config::feature_flags())
}

/// Like [`api_router`] with explicit flags. The Scalar reference is mounted
/// at `/docs` only when `docs` is on.
pub fn api_router_with_flags(store: PostStore, flags: &FeatureFlags) -> Router {
    let state = AppState { store };

    let router = rest::rest_router()
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
