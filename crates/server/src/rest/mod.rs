pub mod post;

use axum::{routing::get, Router};

use crate::store::AppState;

/// REST routes for posts, without state attached.
pub fn rest_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/posts", get(post::list_posts).post(post::create_post))
        .route(
            "/api/v1/posts/{id}",
            get(post::get_post).delete(post::delete_post),
        )
}
