//! Spell checking
//!
//! The game never decides on its own whether a word exists. It asks a
//! [`SpellChecker`], which can be backed by a word list, an OS service, or a fixed
//! set in tests.

mod word_list;

pub use word_list::WordListSpeller;

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Oracle answering whether a word is correctly spelled in a language
pub trait SpellChecker {
    /// Check `word` against the dictionary for `language`
    ///
    /// Implementations should perform case-insensitive lookups.
    fn is_correct(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_correct(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_spell_checkers() {
        let only_silk = |word: &str, _language: &str| word == "silk";
        assert!(only_silk.is_correct("silk", DEFAULT_LANGUAGE));
        assert!(!only_silk.is_correct("slik", DEFAULT_LANGUAGE));
    }

    #[test]
    fn trait_objects_answer_by_language() {
        let checker: Box<dyn SpellChecker> =
            Box::new(|_word: &str, language: &str| language == "en");
        assert!(checker.is_correct("anything", "en"));
        assert!(!checker.is_correct("anything", "fr"));
    }
}
