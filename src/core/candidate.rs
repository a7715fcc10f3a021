//! Candidate word normalization and letter-pool checks
//!
//! A candidate is the player's raw input after lowercasing, trimming and NFC
//! composition. A letter is one extended grapheme cluster, so `é` is one letter
//! whether it was typed precomposed or as `e` plus a combining accent.

use unic_normal::StrNormalForm;
use unic_segment::Graphemes;

/// Normalize raw player input into a candidate word
///
/// Lowercases, trims leading/trailing whitespace (including newlines) and composes
/// to NFC so canonically equivalent spellings compare equal.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// assert_eq!(normalize("cafe\u{301}"), "caf\u{e9}");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().nfc().collect()
}

/// Letters of a word, one grapheme cluster each
#[must_use]
pub fn letters(word: &str) -> Graphemes<'_> {
    Graphemes::new(word)
}

/// Number of letters in a word
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    letters(word).count()
}

/// Check whether `word` can be built from the letters of `root`
///
/// Works on a mutable copy of the root: each letter of `word` removes the first
/// matching occurrence still left in the pool. Fails as soon as a letter has no
/// remaining occurrence.
///
/// # Examples
/// ```
/// use word_scramble::core::is_formable;
///
/// assert!(is_formable("silk", "silkworm"));
/// assert!(is_formable("worm", "silkworm"));
/// assert!(!is_formable("mill", "silkworm")); // only one 'l'
/// assert!(!is_formable("zoo", "silkworm"));
/// ```
#[must_use]
pub fn is_formable(word: &str, root: &str) -> bool {
    let mut pool: Vec<&str> = letters(root).collect();

    for letter in letters(word) {
        if let Some(position) = pool.iter().position(|&l| l == letter) {
            pool.remove(position);
        } else {
            return false;
        }
    }

    true
}
