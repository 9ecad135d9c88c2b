//! Axum route handler for the random-words endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::state::AppState;
use crate::words::cache::WordSource;

#[derive(Debug, Deserialize)]
pub struct RandomWordsQuery {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RandomWordsResponse {
    pub word: String,
    pub language: Language,
    pub remaining: usize,
    pub source: WordSource,
}

/// GET /random-words
///
/// Serves one topic word per call from the per-language cache. Always 200:
/// generation failures are absorbed by the cache's fallback list.
pub async fn handle_random_words(
    State(state): State<AppState>,
    Query(query): Query<RandomWordsQuery>,
) -> Json<RandomWordsResponse> {
    let language = Language::parse(query.language.as_deref());

    let served = state
        .word_cache
        .next_word(language, state.inference.as_ref())
        .await;

    Json(RandomWordsResponse {
        word: served.word,
        language,
        remaining: served.remaining,
        source: served.source,
    })
}
