//! Survey command
//!
//! Ranks every root word in a list by how much it can score.

use crate::game::{RootAnalysis, Rules, analyze_root};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Outcome of surveying a root word list
pub struct SurveyResult {
    /// Analyses ordered best first (highest max score, then most words)
    pub ranked: Vec<RootAnalysis>,
    pub duration: Duration,
}

impl SurveyResult {
    /// Root words that yield no playable word at all
    #[must_use]
    pub fn barren(&self) -> Vec<&str> {
        self.ranked
            .iter()
            .filter(|a| a.words.is_empty())
            .map(|a| a.root.as_str())
            .collect()
    }

    #[must_use]
    pub fn average_words(&self) -> f64 {
        if self.ranked.is_empty() {
            return 0.0;
        }
        let total: usize = self.ranked.iter().map(RootAnalysis::word_count).sum();
        total as f64 / self.ranked.len() as f64
    }
}

/// Analyze every root word, showing a progress bar
pub fn run_survey(
    start_words: &[String],
    dictionary: &[&str],
    rules: &Rules,
    limit: Option<usize>,
) -> SurveyResult {
    let roots: Vec<&String> = start_words
        .iter()
        .take(limit.unwrap_or(start_words.len()))
        .collect();

    let pb = ProgressBar::new(roots.len() as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style.progress_chars("█▓▒░"));

    let start = Instant::now();
    let mut ranked = Vec::with_capacity(roots.len());

    for root in roots {
        pb.set_message(root.clone());
        ranked.push(analyze_root(root, dictionary, rules));
        pb.inc(1);
    }
    pb.finish_and_clear();

    ranked.sort_by(|a, b| {
        b.max_score
            .cmp(&a.max_score)
            .then_with(|| b.word_count().cmp(&a.word_count()))
            .then_with(|| a.root.cmp(&b.root))
    });

    tracing::debug!(roots = ranked.len(), "survey complete");

    SurveyResult {
        ranked,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;

    fn roots(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn ranks_best_root_first() {
        let result = run_survey(
            &roots(&["backpack", "silkworm", "painters"]),
            DICTIONARY,
            &Rules::default(),
            None,
        );
        let order: Vec<&str> = result.ranked.iter().map(|a| a.root.as_str()).collect();
        assert_eq!(order, vec!["painters", "silkworm", "backpack"]);
    }

    #[test]
    fn limit_caps_the_survey() {
        let result = run_survey(
            &roots(&["backpack", "silkworm", "painters"]),
            DICTIONARY,
            &Rules::default(),
            Some(1),
        );
        assert_eq!(result.ranked.len(), 1);
        assert_eq!(result.ranked[0].root, "backpack");
    }

    #[test]
    fn barren_roots_are_reported() {
        let result = run_survey(
            &roots(&["xyz", "backpack"]),
            DICTIONARY,
            &Rules::default(),
            None,
        );
        assert_eq!(result.barren(), vec!["xyz"]);
        assert!((result.average_words() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_survey() {
        let result = run_survey(&[], DICTIONARY, &Rules::default(), None);
        assert!(result.ranked.is_empty());
        assert!(result.average_words().abs() < f64::EPSILON);
    }
}
