use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing here is required: a missing or empty `GEMINI_API_KEY` (or an
/// unset `USE_GEMINI_API` flag) leaves the service running with remote
/// calls disabled. It must never abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. `None` when unset or empty.
    pub gemini_api_key: Option<String>,
    /// Remote calls are attempted only when `USE_GEMINI_API` is exactly `"true"`.
    pub use_gemini_api: bool,
    pub port: u16,
    /// Directory served as the site root (landing page and assets),
    /// resolved relative to the process working directory.
    pub public_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            use_gemini_api: std::env::var("USE_GEMINI_API")
                .map(|v| v == "true")
                .unwrap_or(false),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an environment variable, treating unset and empty as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
