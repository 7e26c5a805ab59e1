//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders every page route. The compiled WASM/JS/CSS bundle is
//! served from the site root's `/pkg` directory and photographs from the
//! configured static directory under `/images`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: health probe, static assets and Leptos SSR.
pub fn app(leptos_options: LeptosOptions, static_dir: &Path) -> Router {
    let routes = generate_route_list(prithi_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || prithi_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(prithi_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    asset_routes(&site_root, static_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Health probe plus the static bundle and image directories.
fn asset_routes(site_root: &Path, static_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/images", ServeDir::new(static_dir.join("images")))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
