use dioxus::prelude::*;
use shared_types::{FeatureFlags, Post, PostFormValues};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store::get_store;

/// Get the current feature flags. Flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// All posts, newest first.
#[server]
pub async fn list_posts() -> Result<Vec<Post>, ServerFnError> {
    Ok(get_store().list().await)
}

/// Create a post from the new-post form.
///
/// The values are trimmed and checked again here; a failure comes back as a
/// serialized `AppError` whose `field_errors` are keyed by field name.
#[cfg_attr(feature = "server", tracing::instrument(skip(values)))]
#[server]
pub async fn create_post(values: PostFormValues) -> Result<Post, ServerFnError> {
    let req = shared_types::CreatePostRequest::from(values).normalized();
    if let Err(err) = req.validate_request() {
        tracing::info!(fields = ?err.field_errors.keys().collect::<Vec<_>>(), "rejected post");
        return Err(err.into_server_fn_error());
    }

    let post = get_store().insert(req).await;
    tracing::info!(post_id = %post.id, "post created");
    Ok(post)
}
