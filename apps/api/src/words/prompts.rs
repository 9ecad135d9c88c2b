//! Prompt templates for random-word batch generation.

use crate::language::Language;

const EN_WORDS: &str = "Say 7 specific topics from countries, history, pop culture, hobbies, etc. Separated commas, NOT list, max 2 terms each.";

const ID_WORDS: &str = "Sebut 7 topik spesifik dari Indonesia soal sejarah, budaya pop, hobi, dll. Dipisah koma, BUKAN list, maks 2 kata per topik.";

/// Builds the instruction text asking for one batch of topic words.
pub fn words_prompt(language: Language) -> &'static str {
    match language {
        Language::En => EN_WORDS,
        Language::Id => ID_WORDS,
    }
}
