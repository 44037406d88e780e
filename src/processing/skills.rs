//! Skill keyword detection against a fixed vocabulary

use crate::error::{AnalyzerError, Result};
use aho_corasick::AhoCorasick;
use std::collections::BTreeSet;

/// Recognized skill phrases. Stored lowercase because matching runs against
/// already-normalized (lowercased) text.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "javascript",
    "machine learning",
    "deep learning",
    "pytorch",
    "sql",
    "tensorflow",
    "data science",
    "nlp",
    "computer vision",
    "docker",
    "aws",
    "react",
    "nodejs",
    "c++",
    "c#",
    "html",
    "css",
];

/// Matches normalized text against the fixed skill vocabulary.
///
/// Multi-word phrases are matched as literal substrings, not token-aware;
/// normalization collapsing whitespace is what makes phrase matches line up.
pub struct SkillMatcher {
    matcher: AhoCorasick,
}

impl SkillMatcher {
    pub fn new() -> Result<Self> {
        let matcher = AhoCorasick::new(SKILL_VOCABULARY).map_err(|e| {
            AnalyzerError::TextProcessing(format!("Failed to build skill matcher: {}", e))
        })?;
        Ok(Self { matcher })
    }

    /// Vocabulary entries occurring as substrings of the given normalized text.
    pub fn detect(&self, normalized_text: &str) -> BTreeSet<String> {
        self.matcher
            .find_overlapping_iter(normalized_text)
            .map(|mat| SKILL_VOCABULARY[mat.pattern().as_usize()].to_string())
            .collect()
    }

    /// Sorted intersection of the skills detected in two normalized texts.
    pub fn matched(&self, normalized_a: &str, normalized_b: &str) -> Vec<String> {
        let skills_a = self.detect(normalized_a);
        let skills_b = self.detect(normalized_b);
        skills_a.intersection(&skills_b).cloned().collect()
    }
}
