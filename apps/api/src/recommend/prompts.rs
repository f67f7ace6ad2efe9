// The single LLM prompt used by the recommendation pipeline.

/// Gift recommendation prompt. Replace `{occasion}` and `{price_range}`
/// before sending.
///
/// The response-shape rules double as the parse contract: the model is told
/// to return a bare JSON array, and the fetcher tolerates prose or fences
/// around it but nothing looser than that.
pub const GIFT_PROMPT_TEMPLATE: &str = r##"Act as a gift recommendation expert.
Please recommend 6 gifts based on the following criteria:
- Occasion: {occasion}
- Price range: {price_range}

Format your response as a valid JSON array of objects with these properties:
- name: The name of the gift
- description: A brief description (max 2 sentences)
- price: The approximate price range
- url: The website URL (use "#" if unknown)

Return ONLY the JSON array with no explanations or other text."##;
