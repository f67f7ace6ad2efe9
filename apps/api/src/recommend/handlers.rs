//! Axum route handlers for the recommendation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::recommend::fetcher::fetch_recommendations;
use crate::recommend::models::{RecommendRequest, RecommendResponse};
use crate::recommend::normalize::normalize;
use crate::state::AppState;

/// POST /api/recommend
///
/// Validates the occasion/budget pair, then fetches suggestions. Valid input
/// always yields 200: remote and parse failures degrade to an empty list
/// rather than an error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let normalized = normalize(request.occasion.as_deref(), request.budget.as_deref())?;

    let recommendations =
        fetch_recommendations(&state.gemini, &normalized.occasion, normalized.price_range).await;

    Ok(Json(RecommendResponse { recommendations }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::llm_client::GeminiHandle;
    use crate::recommend::normalize::REQUIRED_FIELDS_MESSAGE;

    fn disabled_state() -> AppState {
        let config = Config {
            gemini_api_key: Some("test-key".to_string()),
            use_gemini_api: false,
            port: 3000,
            public_dir: "public".to_string(),
            rust_log: "info".to_string(),
        };
        AppState {
            gemini: Arc::new(GeminiHandle::from_config(&config)),
            config,
        }
    }

    fn request(occasion: Option<&str>, budget: Option<&str>) -> RecommendRequest {
        RecommendRequest {
            occasion: occasion.map(str::to_string),
            budget: budget.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_valid_input_with_remote_disabled_yields_empty_list() {
        let result = handle_recommend(
            State(disabled_state()),
            Json(request(Some("birthday"), Some("under-25"))),
        )
        .await
        .unwrap();

        assert!(result.0.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_empty_occasion_is_rejected_with_contract_message() {
        let err = handle_recommend(
            State(disabled_state()),
            Json(request(Some(""), Some("25-50"))),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg == REQUIRED_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_absent_budget_is_rejected_with_contract_message() {
        let err = handle_recommend(State(disabled_state()), Json(request(Some("wedding"), None)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg == REQUIRED_FIELDS_MESSAGE));
    }
}
