//! Per-language word cache: prefetch a batch, serve one word per call,
//! refill on exhaustion.
//!
//! Refill failures never reach the caller: a shuffled copy of the static
//! fallback list takes the batch's place, so `next_word` is infallible.
//! Each language has its own slot behind its own mutex, held across
//! refill-and-serve; requests for different languages never contend.

use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::inference::parse::parse_word_list;
use crate::inference::{TextGenerator, WORDS_SAMPLING};
use crate::language::Language;
use crate::words::fallback::fallback_words;
use crate::words::prompts::words_prompt;

/// Where the current batch came from, reported to callers as metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSource {
    Generated,
    Fallback,
}

/// One served word plus cache metadata.
#[derive(Debug, Clone)]
pub struct ServedWord {
    pub word: String,
    pub remaining: usize,
    pub source: WordSource,
}

#[derive(Debug)]
struct CacheSlot {
    words: Vec<String>,
    cursor: usize,
    source: WordSource,
    fallback: &'static [&'static str],
}

impl CacheSlot {
    fn empty(fallback: &'static [&'static str]) -> Self {
        Self {
            words: Vec::new(),
            cursor: 0,
            source: WordSource::Fallback,
            fallback,
        }
    }

    fn exhausted(&self) -> bool {
        self.cursor >= self.words.len()
    }

    fn refill_from_fallback(&mut self) {
        let mut words: Vec<String> = self.fallback.iter().map(|w| w.to_string()).collect();
        words.shuffle(&mut rand::rng());
        self.words = words;
        self.cursor = 0;
        self.source = WordSource::Fallback;
    }
}

/// Process-wide word cache, constructed once at startup and carried in
/// `AppState`.
pub struct WordCache {
    en: Mutex<CacheSlot>,
    id: Mutex<CacheSlot>,
}

impl WordCache {
    pub fn new() -> Self {
        Self {
            en: Mutex::new(CacheSlot::empty(fallback_words(Language::En))),
            id: Mutex::new(CacheSlot::empty(fallback_words(Language::Id))),
        }
    }

    #[cfg(test)]
    fn with_fallback(en: &'static [&'static str], id: &'static [&'static str]) -> Self {
        Self {
            en: Mutex::new(CacheSlot::empty(en)),
            id: Mutex::new(CacheSlot::empty(id)),
        }
    }

    /// Pre-loads a slot so tests can observe cursor progression and refill
    /// boundaries without going through a generator.
    #[cfg(test)]
    async fn seed(&self, language: Language, words: Vec<String>, source: WordSource) {
        let mut slot = self.slot(language).lock().await;
        slot.words = words;
        slot.cursor = 0;
        slot.source = source;
    }

    fn slot(&self, language: Language) -> &Mutex<CacheSlot> {
        match language {
            Language::En => &self.en,
            Language::Id => &self.id,
        }
    }

    /// Serves the next cached word for `language`, refilling through
    /// `generator` when the batch is exhausted. Always returns a word;
    /// generation failures are logged and absorbed.
    pub async fn next_word(
        &self,
        language: Language,
        generator: &dyn TextGenerator,
    ) -> ServedWord {
        let mut slot = self.slot(language).lock().await;

        if slot.exhausted() {
            refill(language, &mut slot, generator).await;
        }

        if slot.cursor < slot.words.len() {
            let word = slot.words[slot.cursor].clone();
            slot.cursor += 1;
            let remaining = slot.words.len() - slot.cursor;
            info!(
                "Served random word [{}] {}/{}: \"{}\" ({} remaining)",
                language.code(),
                slot.cursor,
                slot.words.len(),
                word,
                remaining
            );
            ServedWord {
                word,
                remaining,
                source: slot.source,
            }
        } else {
            // Both generation and the shuffled refill produced nothing:
            // pick straight from the fallback list rather than erroring.
            let word = slot
                .fallback
                .choose(&mut rand::rng())
                .map(|w| w.to_string())
                .unwrap_or_default();
            warn!(
                "Word cache empty after refill [{}], serving direct fallback: \"{}\"",
                language.code(),
                word
            );
            ServedWord {
                word,
                remaining: 0,
                source: WordSource::Fallback,
            }
        }
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new()
    }
}

async fn refill(language: Language, slot: &mut CacheSlot, generator: &dyn TextGenerator) {
    info!("Generating new batch of random words [{}]...", language.code());

    match generator.generate(words_prompt(language), WORDS_SAMPLING).await {
        Ok(raw) => {
            let words = parse_word_list(&raw);
            if words.is_empty() {
                warn!(
                    "Word generation parsed to nothing [{}], using fallback list",
                    language.code()
                );
                slot.refill_from_fallback();
            } else {
                info!(
                    "Generated word cache [{}]: [{}]",
                    language.code(),
                    words.join(", ")
                );
                slot.words = words;
                slot.cursor = 0;
                slot.source = WordSource::Generated;
            }
        }
        Err(err) => {
            warn!(
                "Word generation failed [{}], using fallback list: {err}",
                language.code()
            );
            slot.refill_from_fallback();
        }
    }
}
