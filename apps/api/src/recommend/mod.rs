// Recommendation pipeline: validation, prompt construction, the single
// Gemini call, and best-effort parsing.
// All LLM calls go through llm_client, never direct Gemini requests.

pub mod extract;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
