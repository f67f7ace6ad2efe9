//! Recommendation fetcher: prompt construction, the single Gemini call, and
//! best-effort parsing of the response.

use tracing::{error, warn};

use crate::llm_client::GeminiHandle;
use crate::recommend::extract::extract_array_span;
use crate::recommend::models::GiftEntry;
use crate::recommend::prompts::GIFT_PROMPT_TEMPLATE;

/// Fetches gift suggestions for a validated request.
///
/// Infallible by contract: when remote calls are not enabled, when the call
/// fails, or when the response cannot be parsed, the result is an empty list
/// and the caller still answers 200.
pub async fn fetch_recommendations(
    gemini: &GeminiHandle,
    occasion: &str,
    price_range: &str,
) -> Vec<GiftEntry> {
    let Some(client) = gemini.active() else {
        return Vec::new();
    };

    let prompt = GIFT_PROMPT_TEMPLATE
        .replace("{occasion}", occasion)
        .replace("{price_range}", price_range);

    match client.generate(&prompt).await {
        Ok(text) => parse_recommendations(&text),
        Err(e) => {
            error!("Gemini API error: {e}");
            Vec::new()
        }
    }
}

/// Second stage of the response parse: decode the bracketed span (or the
/// whole trimmed text when no span exists) as a typed array.
pub fn parse_recommendations(text: &str) -> Vec<GiftEntry> {
    let trimmed = text.trim();
    let candidate = extract_array_span(trimmed).unwrap_or(trimmed);

    match serde_json::from_str::<Vec<GiftEntry>>(candidate) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Error parsing JSON response: {e}");
            warn!("Raw response: {trimmed}");
            Vec::new()
        }
    }
}
