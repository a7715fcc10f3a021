//! Formatting utilities for terminal output

use crate::core::{letter_count, letters};

/// Score badge shown next to an accepted word, e.g. `(4)`
#[must_use]
pub fn score_badge(word: &str) -> String {
    format!("({})", letter_count(word))
}

/// Root word spelled out as spaced capitals, e.g. `S I L K W O R M`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    letters(&word.to_uppercase()).collect::<Vec<_>>().join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "found N of M" summary for a root word
#[must_use]
pub fn found_summary(found: usize, possible: usize) -> String {
    format!("found {found} of {possible} possible words")
}
