mod config;
mod routes;

use leptos::prelude::get_configuration;
use prithi_client::config::SiteConfig;

use crate::config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| ServerError::Leptos(e.to_string()))?
        .leptos_options;

    // Missing key is non-fatal: the contact page tells guests to call instead.
    if SiteConfig::from_build_env().reservations_enabled() {
        tracing::info!("reservation relay configured");
    } else {
        tracing::warn!("WEB3FORMS_ACCESS_KEY not set at build time; online reservations disabled");
    }

    let app = routes::app(leptos_options, &config.static_dir);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "prithi listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
