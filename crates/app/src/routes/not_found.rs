use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { "Page Not Found" }
                p {
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::PostsIndex {},
                    class: "not-found-link",
                    "Back to Posts"
                }
            }
        }
    }
}
