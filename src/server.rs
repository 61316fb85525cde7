use axum::{http::header, response::IntoResponse, routing::get, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::trace::TraceLayer;

use crate::{
    app::{shell, App},
    content::BLOGS,
    rss::build_channel,
};

/// Leptos pages, the RSS feed and static files from the site root, with
/// request tracing on everything.
pub fn router(leptos_options: LeptosOptions) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    tracing::debug!(routes = routes.len(), "generated route list");

    Router::new()
        .route("/rss.xml", get(rss_feed))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn rss_feed() -> impl IntoResponse {
    let channel = build_channel(BLOGS);
    (
        [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
        channel.to_string(),
    )
}
