//! Root word analysis
//!
//! Enumerates every dictionary word a root word can yield. Used for the "found N of M"
//! progress display and by the `analyze` and `survey` commands.

use super::Rules;
use super::engine::score_for;
use crate::core::{is_formable, letter_count};
use rayon::prelude::*;

/// Every word a root word can yield, and what they are worth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAnalysis {
    pub root: String,
    /// Playable words, longest first, then alphabetical
    pub words: Vec<String>,
    pub max_score: usize,
}

impl RootAnalysis {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether `word` is one of the playable words
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Find all dictionary words that would be accepted for `root`
///
/// A word is playable when it differs from the root, can be formed from the root's
/// letters, and meets the minimum length. Dictionary words are assumed to be
/// correctly spelled.
#[must_use]
pub fn analyze_root(root: &str, dictionary: &[&str], rules: &Rules) -> RootAnalysis {
    let mut words: Vec<String> = dictionary
        .par_iter()
        .filter(|&&word| {
            word != root && letter_count(word) >= rules.min_length && is_formable(word, root)
        })
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let max_score = words.iter().map(|w| score_for(w)).sum();

    RootAnalysis {
        root: root.to_string(),
        words,
        max_score,
    }
}
