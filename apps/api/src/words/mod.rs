// Random-word serving: per-language prefetch cache over the inference
// client, with a shuffled static fallback when generation fails.

pub mod cache;
pub mod fallback;
pub mod handlers;
pub mod prompts;
