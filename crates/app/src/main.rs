use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();
        server::health::record_start_time();

        let store = server::store::get_store().clone();
        if flags.seed_posts && store.is_empty().await {
            store.seed().await;
        }

        let max_body = server::config::max_post_bytes();
        tracing::info!(max_body, docs = flags.docs, "starting posts server");

        let router = dioxus::server::router(App)
            .merge(server::openapi::api_router(store))
            .layer(axum::extract::DefaultBodyLimit::max(max_body))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
