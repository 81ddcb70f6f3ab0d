mod brief;
mod config;
mod errors;
mod match_client;
mod models;
mod routes;
mod session;
mod state;
mod tags;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::match_client::HttpCandidateMatcher;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting role brief service v{}", env!("CARGO_PKG_VERSION"));

    let matcher = HttpCandidateMatcher::new(config.match_endpoint_url.clone());
    info!("Candidate matcher endpoint: {}", matcher.endpoint());
    info!("Exports go to {}", config.export_dir.display());

    let state = AppState {
        config: config.clone(),
        sessions: SessionStore::new(),
        matcher: Arc::new(matcher),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
