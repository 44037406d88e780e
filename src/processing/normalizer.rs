//! Text normalization: punctuation stripping, lowercasing, stop-word removal

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// English stop words (the standard NLTK list).
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

fn non_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W+").expect("Invalid non-word regex"))
}

/// Normalize text for comparison.
///
/// Collapses every run of non-word characters to a single space, lowercases,
/// splits on whitespace, drops stop words, and rejoins the surviving tokens
/// with single spaces. Pure and idempotent; empty input yields an empty
/// string.
pub fn normalize(text: &str) -> String {
    let spaced = non_word_regex().replace_all(text, " ");
    let lowered = spaced.to_lowercase();

    lowered
        .split_whitespace()
        .filter(|token| !stop_words().contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
