mod advisor;
mod analysis;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::{AdvisorBackend, GeminiAdvisor};
use crate::analysis::AnalyzerOptions;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the advisor (optional; analysis works without it)
    let advisor: Arc<dyn AdvisorBackend> =
        Arc::new(GeminiAdvisor::new(config.gemini_api_key.clone()));
    if advisor.is_configured() {
        info!("Advisor configured");
    } else {
        info!("Advisor disabled (GEMINI_API_KEY not set); analysis is unaffected");
    }

    // Resolve engine options once
    let analyzer_options = if config.deterministic_synonyms {
        AnalyzerOptions::deterministic()
    } else {
        AnalyzerOptions::default()
    };

    // Build app state
    let state = AppState {
        advisor,
        analyzer_options,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
