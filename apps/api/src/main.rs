mod config;
mod cors;
mod errors;
mod facts;
mod inference;
mod language;
mod routes;
mod state;
mod words;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cors::AllowedOrigins;
use crate::inference::InferenceClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::words::cache::WordCache;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Factoid API v{}", env!("CARGO_PKG_VERSION"));
    info!("Supported languages: English (en), Indonesian (id)");

    // Initialize inference client
    let inference = InferenceClient::new(
        config.replicate_api_token.clone(),
        config.replicate_timeout_ms,
    );
    info!(
        "Inference client initialized (model: {}, timeout: {}ms)",
        inference::MODEL,
        config.replicate_timeout_ms
    );

    // Derive the origin allow-list
    let allowed_origins = AllowedOrigins::from_config(&config);
    info!("Allowed origins: {allowed_origins:?}");

    // Build app state
    let state = AppState {
        inference: Arc::new(inference),
        word_cache: Arc::new(WordCache::new()),
        allowed_origins,
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
