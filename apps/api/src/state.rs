use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GeminiHandle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote generation readiness, decided once at startup and never
    /// re-initialized.
    pub gemini: Arc<GeminiHandle>,
    pub config: Config,
}
