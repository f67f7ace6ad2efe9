mod config;
mod errors;
mod llm_client;
mod recommend;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiHandle;
use crate::routes::{build_router, handle_panic};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first. No variable is required: a missing key only
    // disables remote calls, it never aborts startup.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Giftwise API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini handle once; construction failure leaves it
    // Unavailable and the service runs in fallback mode.
    let gemini = Arc::new(GeminiHandle::from_config(&config));
    info!(
        "Gemini API {} (model: {})",
        gemini.status_label(),
        llm_client::MODEL
    );

    // Build app state
    let state = AppState {
        gemini,
        config: config.clone(),
    };

    // Build router. CatchPanicLayer sits outermost so any panic in the
    // pipeline still answers with the catch-all 500 body.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // TODO: tighten CORS in production
        .layer(CatchPanicLayer::custom(handle_panic));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
