mod comparison;
mod config;
mod errors;
mod results;
mod routes;
mod scoring_client;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::results::ResultStore;
use crate::routes::build_router;
use crate::scoring_client::HttpMatchScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillpath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize external scorer client
    let scorer = HttpMatchScorer::new(
        &config.scorer_url,
        Duration::from_secs(config.scorer_timeout_secs),
    )?;
    info!("Scorer client initialized (endpoint: {})", scorer.endpoint());

    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(scorer),
        results: ResultStore::default(),
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
