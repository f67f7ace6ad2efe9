//! First stage of the two-stage response parse: locating the JSON array
//! inside whatever text the model returned.

/// Returns the substring spanning the first `[` through the last `]`,
/// when both are present in that order.
///
/// Models often wrap the array in prose or markdown fences; the greedy span
/// strips either without having to understand them. Whether the span is
/// actually valid JSON is the second stage's problem.
pub fn extract_array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bare_array() {
        assert_eq!(extract_array_span(r#"[{"name":"Mug"}]"#), Some(r#"[{"name":"Mug"}]"#));
        assert_eq!(extract_array_span("[]"), Some("[]"));
    }

    #[test]
    fn test_extracts_array_surrounded_by_prose() {
        let text = "Here are my suggestions:\n[{\"name\":\"Mug\"}]\nEnjoy!";
        assert_eq!(extract_array_span(text), Some("[{\"name\":\"Mug\"}]"));
    }

    #[test]
    fn test_extracts_array_inside_markdown_fence() {
        let text = "```json\n[{\"name\":\"Mug\"}]\n```";
        assert_eq!(extract_array_span(text), Some("[{\"name\":\"Mug\"}]"));
    }

    #[test]
    fn test_span_is_greedy_across_nested_brackets() {
        let text = "noise [1, [2, 3], 4] more [5] tail";
        assert_eq!(extract_array_span(text), Some("[1, [2, 3], 4] more [5]"));
    }

    #[test]
    fn test_returns_none_without_both_brackets() {
        assert_eq!(extract_array_span("no array here"), None);
        assert_eq!(extract_array_span("only open ["), None);
        assert_eq!(extract_array_span("only close ]"), None);
    }

    #[test]
    fn test_returns_none_when_brackets_are_reversed() {
        assert_eq!(extract_array_span("] backwards ["), None);
    }
}
