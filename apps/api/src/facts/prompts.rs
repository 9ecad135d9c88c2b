//! Prompt templates for fact generation, keyed by language and batch.
//! Replace `{topic}` before sending.

use crate::language::Language;

const EN_POPULAR: &str =
    "List 5 popular facts about {topic}. Each <35 words & give relevant emojis";

const EN_UNPOPULAR: &str =
    "(facts 6-10) List 5 unpopular facts about {topic}. Each <35 word & give relevant emojis. Be Unique";

const ID_POPULAR: &str =
    "Beri 5 fakta ringkas umum soal {topic}. Per fakta beri emoji relevan per fakta SINGKAT AJA. Each <15 words. Pakai Bahasa Indonesia";

const ID_UNPOPULAR: &str =
    "Beri 5 fakta ringkas unpopular soal {topic}. Each <15 words. Per fakta beri emoji relevan per fakta SINGKAT AJA. Pakai Bahasa Indonesia";

/// Builds the instruction text for a facts request. `more` selects the
/// second-batch "unpopular" template.
pub fn facts_prompt(topic: &str, language: Language, more: bool) -> String {
    let template = match (language, more) {
        (Language::En, false) => EN_POPULAR,
        (Language::En, true) => EN_UNPOPULAR,
        (Language::Id, false) => ID_POPULAR,
        (Language::Id, true) => ID_UNPOPULAR,
    };
    template.replace("{topic}", topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_topic() {
        let prompt = facts_prompt("volcanoes", Language::En, false);
        assert!(prompt.contains("volcanoes"));
        assert!(!prompt.contains("{topic}"));
    }

    #[test]
    fn more_selects_unpopular_template() {
        let first = facts_prompt("batik", Language::Id, false);
        let second = facts_prompt("batik", Language::Id, true);
        assert_ne!(first, second);
        assert!(second.contains("unpopular"));
    }
}
