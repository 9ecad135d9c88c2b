//! Parsers that turn loosely formatted model output into clean lists.
//!
//! Both functions are pure: same input text, same output list, no shared
//! state. The model numbers, bullets, or comma-separates its output
//! inconsistently, so the parsers only assume delimiter shapes, never counts.

use regex::Regex;
use std::sync::LazyLock;

/// Enumerator boundary: "1. ", "12. ", "- ", "* " with surrounding space.
static LIST_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:\d+\.\s+|[-*]\s+)").expect("valid pattern"));

/// Residual "1." prefix the boundary split did not fully consume.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid pattern"));

/// Numbering anywhere in the text, for inline-numbered word runs.
static INLINE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*").expect("valid pattern"));

/// Fragments this long or longer are noise (the model rambling), not words.
const MAX_WORD_CHARS: usize = 25;
/// Cap on a parsed word batch.
const MAX_WORDS: usize = 10;

/// List mode: splits generated text into individual facts on numbered or
/// bulleted boundaries, preserving order. The result may hold fewer entries
/// than the prompt asked for.
pub fn parse_fact_list(raw: &str) -> Vec<String> {
    LIST_BOUNDARY
        .split(raw)
        .map(|fragment| LEADING_NUMBER.replace(fragment.trim(), "").trim().to_string())
        .filter(|fact| !fact.is_empty())
        .collect()
}

/// Word mode: strips inline numbering, splits on comma or newline, then
/// lowercases and trims each fragment. Empty and overlong fragments are
/// dropped and the batch is capped at [`MAX_WORDS`].
pub fn parse_word_list(raw: &str) -> Vec<String> {
    let stripped = INLINE_NUMBER.replace_all(raw, "");
    stripped
        .split(|c| c == ',' || c == '\n')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().count() < MAX_WORD_CHARS)
        .take(MAX_WORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_numbered_facts() {
        let raw = "1. Cats purr. 2. Dogs bark. 3. Fish swim.";
        assert_eq!(
            parse_fact_list(raw),
            vec!["Cats purr.", "Dogs bark.", "Fish swim."]
        );
    }

    #[test]
    fn splits_bulleted_facts() {
        assert_eq!(parse_fact_list("- Red\n- Blue"), vec!["Red", "Blue"]);
        assert_eq!(parse_fact_list("* Up\n* Down"), vec!["Up", "Down"]);
    }

    #[test]
    fn strips_residual_numbering() {
        // A fragment can still open with "4." when the model skips the space
        assert_eq!(parse_fact_list("4.Oddly formatted fact"), vec!["Oddly formatted fact"]);
    }

    #[test]
    fn empty_input_yields_no_facts() {
        assert_eq!(parse_fact_list(""), Vec::<String>::new());
        assert_eq!(parse_fact_list("   \n  "), Vec::<String>::new());
    }

    #[test]
    fn fewer_facts_than_requested_is_fine() {
        let raw = "1. Only one fact here.";
        assert_eq!(parse_fact_list(raw), vec!["Only one fact here."]);
    }

    #[test]
    fn parses_inline_numbered_words() {
        let raw = "1. ninja, 2. pizza\nrobots";
        assert_eq!(parse_word_list(raw), vec!["ninja", "pizza", "robots"]);
    }

    #[test]
    fn lowercases_and_trims_words() {
        assert_eq!(
            parse_word_list("  Aurora ,CHOCOLATE\n Dolphins "),
            vec!["aurora", "chocolate", "dolphins"]
        );
    }

    #[test]
    fn drops_overlong_fragments() {
        let raw = format!("ninja, {}, pizza", "x".repeat(25));
        assert_eq!(parse_word_list(&raw), vec!["ninja", "pizza"]);
    }

    #[test]
    fn caps_batch_at_ten() {
        let raw = (1..=15).map(|i| format!("word{i}")).collect::<Vec<_>>().join(", ");
        let words = parse_word_list(&raw);
        assert_eq!(words.len(), 10);
        assert_eq!(words[0], "word1");
        assert_eq!(words[9], "word10");
    }

    #[test]
    fn parsing_is_deterministic() {
        let raw = "1. ninja, 2. pizza\nrobots";
        assert_eq!(parse_word_list(raw), parse_word_list(raw));
        let facts = "1. A. 2. B.";
        assert_eq!(parse_fact_list(facts), parse_fact_list(facts));
    }
}
