//! Hand-curated backup word lists, served (shuffled) when live generation
//! is unavailable.

use crate::language::Language;

pub const EN_FALLBACK: &[&str] = &[
    "ninja", "einstein", "pizza", "dolphins", "aurora", "chocolate", "robots", "space", "ocean",
    "mountains", "dragons", "crystals", "volcanoes", "antarctica", "pyramids", "sakura",
    "thunder", "diamonds", "galaxies", "rainbows",
];

pub const ID_FALLBACK: &[&str] = &[
    "rendang", "borobudur", "komodo", "batik", "gamelan", "wayang", "angklung", "raisa", "sunda",
    "java", "bali", "lombok", "sulawesi", "kalimantan", "sumatra", "papua", "maluku", "nusantara",
    "majapahit", "sriwijaya",
];

pub fn fallback_words(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN_FALLBACK,
        Language::Id => ID_FALLBACK,
    }
}
