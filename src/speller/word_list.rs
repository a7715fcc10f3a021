//! Spell checker backed by a plain word list

use super::SpellChecker;
use crate::core::normalize;
use rustc_hash::FxHashSet;

/// A dictionary of known words pinned to a single language
///
/// Lookups are case-insensitive. Asking about any other language answers `false`.
#[derive(Debug, Clone)]
pub struct WordListSpeller {
    language: String,
    words: FxHashSet<String>,
}

impl WordListSpeller {
    /// Build a speller from any list of words
    ///
    /// Words are normalized like player input; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::speller::{SpellChecker, WordListSpeller};
    ///
    /// let speller = WordListSpeller::new("en", ["Silk", "worm"]);
    /// assert!(speller.is_correct("SILK", "en"));
    /// assert!(!speller.is_correct("silk", "de"));
    /// ```
    pub fn new<I, W>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        let language = language.into();

        tracing::debug!(language = %language, words = words.len(), "built word list speller");

        Self { language, words }
    }

    /// Language this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether this dictionary can answer for `language`
    #[must_use]
    pub fn speaks(&self, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language)
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words the speller would accept in `language`
    ///
    /// Empty when the dictionary is pinned to another language.
    pub fn words_in(&self, language: &str) -> impl Iterator<Item = &str> {
        let speaks = self.speaks(language);
        self.words().filter(move |_| speaks)
    }
}

impl SpellChecker for WordListSpeller {
    fn is_correct(&self, word: &str, language: &str) -> bool {
        self.speaks(language) && self.words.contains(&normalize(word))
    }
}
