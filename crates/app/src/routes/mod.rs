pub mod not_found;
pub mod posts;

use dioxus::prelude::*;
use shared_types::FeatureFlags;

use not_found::NotFound;
use posts::{PostsIndex, PostsNew};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    PostsIndex {},
    #[route("/posts/new")]
    PostsNew {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top bar with the brand link, wrapping every post page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let flags: FeatureFlags = use_context();

    let section = match route {
        Route::PostsNew {} => "New Post",
        _ => "Posts",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        header { class: "app-navbar",
            Link { to: Route::PostsIndex {}, class: "app-brand", "Posts" }
            span { class: "app-section", "{section}" }
            if flags.docs {
                a { class: "app-docs", href: "/docs", "API docs" }
            }
        }
        main { class: "container",
            Outlet::<Route> {}
        }
    }
}
