//! LLM client, the single point of entry for all Gemini API calls in Giftwise.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All LLM interactions MUST go through this module, and handlers reach it
//! through the process-wide `GeminiHandle` built once at startup.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all LLM calls in Giftwise.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-pro";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Client not configured: {0}")]
    NotConfigured(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The Gemini client used for all generation in Giftwise.
/// Wraps the `generateContent` REST endpoint. One attempt per call, no retry:
/// callers fold every failure into an empty recommendation list.
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client. Fails when the API key is absent/empty or the HTTP
    /// client cannot be constructed; `GeminiHandle::from_config` folds that
    /// failure into the `Unavailable` state.
    ///
    /// No explicit timeout: requests rely on the HTTP client's defaults.
    pub fn new(api_key: &str) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::NotConfigured(
                "GEMINI_API_KEY is not set".to_string(),
            ));
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", GEMINI_API_BASE, MODEL)
    }

    /// Sends a single prompt and returns the model's raw text response.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!("Sending prompt to Gemini ({} chars)", prompt.len());

        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: GenerateContentResponse = response.json().await?;

        match api_response.text() {
            Some(text) => {
                debug!("Gemini responded with {} chars", text.len());
                Ok(text.to_string())
            }
            None => Err(LlmError::EmptyContent),
        }
    }
}

/// Readiness of the remote generation path, decided once at process start.
///
/// Replaces an implicit "is the client null" check with an explicit
/// three-state lifecycle: construction failed, constructed but the feature
/// flag is off, or fully enabled. The handle is shared read-only state and
/// is never re-initialized.
pub enum GeminiHandle {
    /// The client could not be constructed (missing key or HTTP client failure).
    Unavailable,
    /// The client exists but `USE_GEMINI_API` is not `"true"`.
    /// The payload is held but nothing reads it while the flag is off.
    #[allow(dead_code)]
    Disabled(GeminiClient),
    /// Remote calls are attempted.
    Enabled(GeminiClient),
}

impl GeminiHandle {
    /// Builds the handle from config. Construction failure is logged and the
    /// service keeps running with remote calls disabled.
    pub fn from_config(config: &Config) -> Self {
        match GeminiClient::new(config.gemini_api_key.as_deref().unwrap_or("")) {
            Ok(client) if config.use_gemini_api => GeminiHandle::Enabled(client),
            Ok(client) => GeminiHandle::Disabled(client),
            Err(e) => {
                tracing::error!("Error initializing Gemini client: {e}");
                tracing::info!("Gemini not available, running in fallback mode");
                GeminiHandle::Unavailable
            }
        }
    }

    /// The client to call, present only when remote generation is enabled.
    pub fn active(&self) -> Option<&GeminiClient> {
        match self {
            GeminiHandle::Enabled(client) => Some(client),
            _ => None,
        }
    }

    /// Readiness label for the startup log line and the health probe.
    pub fn status_label(&self) -> &'static str {
        match self {
            GeminiHandle::Unavailable => "unavailable",
            GeminiHandle::Disabled(_) => "disabled",
            GeminiHandle::Enabled(_) => "enabled",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini API Request/Response Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Subset of the `generateContent` response this service consumes.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first part, if any.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}
