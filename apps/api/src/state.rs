use std::sync::Arc;

use crate::cors::AllowedOrigins;
use crate::inference::TextGenerator;
use crate::words::cache::WordCache;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generation seam. Production: `InferenceClient`; tests: mocks.
    pub inference: Arc<dyn TextGenerator>,
    /// Per-language random-word cache, one instance for the process lifetime.
    pub word_cache: Arc<WordCache>,
    pub allowed_origins: AllowedOrigins,
}
