use dioxus::prelude::*;
use shared_types::{AppError, Post};
use shared_ui::components::{Button, PageActions, PageHeader, PageTitle};

use crate::routes::Route;

/// Root page: existing posts, newest first, and the way into the new-post form.
#[component]
pub fn PostsIndex() -> Element {
    let posts = use_server_future(move || async move { server::api::list_posts().await })?;

    let result = posts.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./posts.css") }

        PageHeader {
            PageTitle { "Posts" }
            PageActions {
                Link { to: Route::PostsNew {},
                    Button { "Add a Post" }
                }
            }
        }

        match result {
            Some(Ok(list)) => rsx! {
                PostList { posts: list }
            },
            Some(Err(e)) => {
                let message = AppError::friendly_message(&e.to_string());
                rsx! {
                    div { class: "alert alert-error", "{message}" }
                }
            }
            None => rsx! {
                p { class: "loading", "Loading..." }
            },
        }
    }
}

#[component]
fn PostList(posts: Vec<Post>) -> Element {
    if posts.is_empty() {
        return rsx! {
            p { class: "post-list-empty", "No posts yet." }
        };
    }

    rsx! {
        ul { class: "post-list",
            for post in posts {
                li { key: "{post.id}", class: "post-list-item",
                    strong { "{post.title}" }
                    span { class: "post-categories", "{post.categories}" }
                }
            }
        }
    }
}
