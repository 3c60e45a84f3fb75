mod config;
mod errors;
mod extract;
mod feedback;
mod llm_client;
mod report;
mod review;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feedback::{FeedbackComposer, FeedbackGenerator, LlmFeedbackGenerator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

/// Upload cap. Text-based resume PDFs are small; 10 MiB leaves headroom for
/// image-heavy exports while still bounding request size.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Reviewer API v{}", env!("CARGO_PKG_VERSION"));

    // Remote feedback is optional: without a credential the composer runs the
    // deterministic local strategy only.
    let remote: Option<Arc<dyn FeedbackGenerator>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                Duration::from_secs(config.feedback_timeout_secs),
            );
            info!(
                "Remote feedback enabled (model: {}, timeout: {}s)",
                llm_client::MODEL,
                config.feedback_timeout_secs
            );
            Some(Arc::new(LlmFeedbackGenerator::new(llm)))
        }
        None => {
            info!("No API credential configured; feedback will use the local strategy");
            None
        }
    };

    let composer = FeedbackComposer::new(remote);

    let state = AppState {
        config: config.clone(),
        composer,
    };

    let app = build_router(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
