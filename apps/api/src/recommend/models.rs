//! Wire types for the recommendation API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/recommend`.
///
/// Both fields are optional at the serde layer so that an absent field
/// reaches domain validation and produces the fixed 400 body, rather than
/// being rejected by the framework's deserializer.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub occasion: Option<String>,
    pub budget: Option<String>,
}

/// A single gift suggestion as produced by the model.
///
/// All four fields are required: an array element missing any of them fails
/// the typed parse, and the whole response degrades to an empty list.
/// Unknown fields in an element are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftEntry {
    pub name: String,
    pub description: String,
    pub price: String,
    pub url: String,
}

/// Body of the `POST /api/recommend` success response.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<GiftEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_tolerates_absent_fields() {
        let request: RecommendRequest = serde_json::from_str("{}").unwrap();
        assert!(request.occasion.is_none());
        assert!(request.budget.is_none());

        let request: RecommendRequest =
            serde_json::from_str(r#"{"occasion":"birthday"}"#).unwrap();
        assert_eq!(request.occasion.as_deref(), Some("birthday"));
        assert!(request.budget.is_none());
    }

    #[test]
    fn test_gift_entry_requires_all_four_fields() {
        let missing_url = r#"{
            "name": "Scented candle",
            "description": "A relaxing lavender candle.",
            "price": "$15"
        }"#;
        assert!(serde_json::from_str::<GiftEntry>(missing_url).is_err());
    }

    #[test]
    fn test_gift_entry_ignores_unknown_fields() {
        let with_extra = r##"{
            "name": "Scented candle",
            "description": "A relaxing lavender candle.",
            "price": "$15",
            "url": "#",
            "rating": 4.5
        }"##;
        let entry: GiftEntry = serde_json::from_str(with_extra).unwrap();
        assert_eq!(entry.name, "Scented candle");
        assert_eq!(entry.url, "#");
    }

    #[test]
    fn test_response_serializes_with_recommendations_key() {
        let response = RecommendResponse {
            recommendations: vec![],
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "recommendations": [] })
        );
    }
}
