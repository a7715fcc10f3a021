//! Runtime configuration
//!
//! Gathers the command-line choices into one struct and turns them into a ready
//! game.

use crate::game::{Rules, WordScramble};
use crate::speller::{DEFAULT_LANGUAGE, WordListSpeller};
use crate::wordlists::WordListError;
use crate::wordlists::loader::{self, EMBEDDED};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// `embedded` or a path to a newline-delimited root word list
    pub start_words: String,
    /// `embedded` or a path to a newline-delimited dictionary
    pub dictionary: String,
    /// Language a dictionary file is written in; the embedded one is always English
    pub dictionary_language: String,
    /// Requested rules, including the language words are checked in
    pub rules: Rules,
    /// Seed for root word selection; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: EMBEDDED.to_string(),
            dictionary: EMBEDDED.to_string(),
            dictionary_language: DEFAULT_LANGUAGE.to_string(),
            rules: Rules::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Language the configured dictionary is written in
    #[must_use]
    pub fn speller_language(&self) -> &str {
        if self.dictionary == EMBEDDED {
            DEFAULT_LANGUAGE
        } else {
            &self.dictionary_language
        }
    }

    /// Load the dictionary into a speller pinned to its own language
    ///
    /// A speller whose language differs from the requested one rejects every word.
    ///
    /// # Errors
    ///
    /// Returns a [`WordListError`] if a dictionary file cannot be loaded.
    pub fn load_speller(&self) -> Result<WordListSpeller, WordListError> {
        let words = loader::load_dictionary(&self.dictionary)?;
        let speller = WordListSpeller::new(self.speller_language(), words);

        if !speller.speaks(&self.rules.language) {
            tracing::warn!(
                requested = %self.rules.language,
                dictionary = %speller.language(),
                "no dictionary for the requested language; every word will be rejected"
            );
        }

        Ok(speller)
    }

    /// Load both word lists and build a game that has not started yet
    ///
    /// # Errors
    ///
    /// Returns a [`WordListError`] if either list cannot be loaded or is empty.
    pub fn build_game(&self) -> Result<WordScramble<WordListSpeller>, WordListError> {
        let start_words = loader::load_start_words(&self.start_words)?;
        let speller = self.load_speller()?;
        WordScramble::new(start_words, speller, self.rules.clone())
    }

    /// Random source for root word selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    #[test]
    fn default_uses_embedded_lists() {
        let config = GameConfig::default();
        assert_eq!(config.start_words, "embedded");
        assert_eq!(config.dictionary, "embedded");
        assert_eq!(config.dictionary_language, "en");
        assert_eq!(config.rules.language, "en");
        assert_eq!(config.rules.min_length, 3);
    }

    #[test]
    fn build_game_from_embedded_lists() {
        let game = GameConfig::default().build_game().unwrap();
        assert!(!game.is_started());
        assert!(game.start_words().iter().any(|w| w == "silkworm"));
    }

    #[test]
    fn embedded_dictionary_accepts_common_words() {
        let mut game = GameConfig::default().build_game().unwrap();
        game.start_with_root("blanket");
        assert!(game.submit("tank").is_ok());
        assert!(game.submit("ban").is_ok());

        game.start_with_root("silkworm");
        assert!(game.submit("worms").is_ok());
    }

    #[test]
    fn embedded_dictionary_is_english_only() {
        let config = GameConfig {
            rules: Rules {
                language: "fr".to_string(),
                ..Rules::default()
            },
            ..GameConfig::default()
        };
        let mut game = config.build_game().unwrap();
        assert_eq!(game.speller().language(), "en");

        game.start_with_root("silkworm");
        assert_eq!(game.submit("silk"), Err(ValidationError::NotAWord));
    }

    #[test]
    fn dictionary_language_only_applies_to_files() {
        let config = GameConfig {
            dictionary_language: "fr".to_string(),
            ..GameConfig::default()
        };
        assert_eq!(config.speller_language(), "en");

        let config = GameConfig {
            dictionary: "mots.txt".to_string(),
            ..config
        };
        assert_eq!(config.speller_language(), "fr");
    }

    #[test]
    fn file_dictionary_answers_in_its_own_language() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_config_fr.txt",
            std::process::id()
        ));
        std::fs::write(&path, "soir\nrois\n").unwrap();

        let config = GameConfig {
            dictionary: path.to_string_lossy().into_owned(),
            dictionary_language: "fr".to_string(),
            rules: Rules {
                language: "fr".to_string(),
                ..Rules::default()
            },
            ..GameConfig::default()
        };
        let mut game = config.build_game().unwrap();
        game.start_with_root("croissant");
        assert!(game.submit("soir").is_ok());
        assert_eq!(game.submit("coin"), Err(ValidationError::NotAWord));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_dictionary_is_an_error() {
        let config = GameConfig {
            dictionary: "/no/such/dictionary.txt".to_string(),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.build_game(),
            Err(WordListError::Io { .. })
        ));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(9),
            ..GameConfig::default()
        };
        let mut a = config.build_game().unwrap();
        let mut b = config.build_game().unwrap();
        assert_eq!(
            a.new_game_with(&mut config.rng()),
            b.new_game_with(&mut config.rng())
        );
    }
}
