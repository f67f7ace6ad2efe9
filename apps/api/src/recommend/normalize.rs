//! Input normalization: presence checks and the budget-code mapping.

use crate::errors::AppError;

/// Fixed message for the missing-field rejection. Part of the wire contract,
/// the browser client matches on it.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Occasion and budget are required";

/// A validated request, ready for prompt construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub occasion: String,
    pub price_range: &'static str,
}

/// Validates the occasion/budget pair and resolves the price-range phrase.
///
/// Absent and empty values are rejected alike; whitespace-only values pass.
pub fn normalize(
    occasion: Option<&str>,
    budget: Option<&str>,
) -> Result<NormalizedRequest, AppError> {
    let occasion = occasion.filter(|v| !v.is_empty());
    let budget = budget.filter(|v| !v.is_empty());

    match (occasion, budget) {
        (Some(occasion), Some(budget)) => Ok(NormalizedRequest {
            occasion: occasion.to_string(),
            price_range: price_range_phrase(budget),
        }),
        _ => Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    }
}

/// Renders a budget code as the phrase embedded in the prompt.
/// Total mapping: any unrecognized code falls back to "any price range".
pub fn price_range_phrase(budget: &str) -> &'static str {
    match budget {
        "under-25" => "under $25",
        "25-50" => "$25 to $50",
        "50-100" => "$50 to $100",
        "over-100" => "over $100",
        _ => "any price range",
    }
}
