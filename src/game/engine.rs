//! Word Scramble game engine
//!
//! Holds the current [`GameState`] and runs every submission through the validation
//! pipeline.

use crate::core::{
    GameState, MIN_WORD_LENGTH, ValidationError, is_formable, letter_count, normalize,
};
use crate::speller::{DEFAULT_LANGUAGE, SpellChecker};
use crate::wordlists::WordListError;
use rand::Rng;

/// Rules a submission is judged by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Language tag handed to the spell checker
    pub language: String,
    /// Fewest letters an accepted word may have
    pub min_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            min_length: MIN_WORD_LENGTH,
        }
    }
}

/// Outcome of a submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank after trimming; nothing happened
    Empty,
    /// Word was accepted and scored
    Accepted { word: String, points: usize },
}

/// The game: a root word, the words found so far and the score
///
/// Generic over the spell checker so tests can inject a fixed dictionary.
pub struct WordScramble<S: SpellChecker> {
    start_words: Vec<String>,
    speller: S,
    rules: Rules,
    state: GameState,
}

impl<S: SpellChecker> WordScramble<S> {
    /// Create a game that has not started yet
    ///
    /// Call [`new_game`](Self::new_game) to pick the first root word. Until then the
    /// root word is empty and every non-empty submission is unformable.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if `start_words` holds no usable words.
    pub fn new(start_words: Vec<String>, speller: S, rules: Rules) -> Result<Self, WordListError> {
        let start_words: Vec<String> = start_words
            .into_iter()
            .map(|w| normalize(&w))
            .filter(|w| !w.is_empty())
            .collect();

        if start_words.is_empty() {
            return Err(WordListError::Empty {
                origin: "start words".to_string(),
            });
        }

        Ok(Self {
            start_words,
            speller,
            rules,
            state: GameState::default(),
        })
    }

    /// Start a new game with a uniformly random root word
    pub fn new_game(&mut self) -> &str {
        self.new_game_with(&mut rand::rng())
    }

    /// Start a new game drawing the root word from `rng`
    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.start_words.len());
        let root = self.start_words[index].clone();
        self.start_with_root(root)
    }

    /// Start a new game with a chosen root word
    pub fn start_with_root(&mut self, root: impl AsRef<str>) -> &str {
        self.state = GameState::new(normalize(root.as_ref()));
        tracing::info!(root = %self.state.root_word, "new game");
        &self.state.root_word
    }

    /// Validate a raw submission and, if it passes, score it
    ///
    /// Checks run in a fixed order and the first failure wins: originality,
    /// possibility, dictionary, minimum length. Blank input is ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failed check. State is unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::{Rules, Submission, WordScramble};
    /// use word_scramble::speller::WordListSpeller;
    ///
    /// let speller = WordListSpeller::new("en", ["silk", "worm"]);
    /// let mut game = WordScramble::new(vec!["silkworm".into()], speller, Rules::default()).unwrap();
    /// game.new_game();
    ///
    /// let outcome = game.submit(" Silk ").unwrap();
    /// assert_eq!(outcome, Submission::Accepted { word: "silk".into(), points: 4 });
    /// assert_eq!(game.score(), 4);
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<Submission, ValidationError> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(Submission::Empty);
        }

        if let Err(error) = self.validate(&word) {
            tracing::debug!(word = %word, %error, "rejected");
            return Err(error);
        }

        let points = score_for(&word);
        self.state.accept(word.clone(), points);
        tracing::debug!(word = %word, points, score = self.state.score, "accepted");

        Ok(Submission::Accepted { word, points })
    }

    fn validate(&self, word: &str) -> Result<(), ValidationError> {
        if !self.is_original(word) {
            return Err(ValidationError::AlreadyUsed);
        }
        if !self.is_possible(word) {
            return Err(ValidationError::Unformable);
        }
        if !self.is_real(word) {
            return Err(ValidationError::NotAWord);
        }
        if !self.is_long_enough(word) {
            return Err(ValidationError::TooShort);
        }
        Ok(())
    }

    /// Not the root word and not found before
    #[must_use]
    pub fn is_original(&self, word: &str) -> bool {
        word != self.state.root_word && !self.state.is_used(word)
    }

    /// Buildable from the root word's letters
    #[must_use]
    pub fn is_possible(&self, word: &str) -> bool {
        is_formable(word, &self.state.root_word)
    }

    /// Known to the spell checker in the configured language
    #[must_use]
    pub fn is_real(&self, word: &str) -> bool {
        self.speller.is_correct(word, &self.rules.language)
    }

    /// At least the minimum number of letters
    #[must_use]
    pub fn is_long_enough(&self, word: &str) -> bool {
        letter_count(word) >= self.rules.min_length
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.state.root_word
    }

    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.state.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.state.score
    }

    #[inline]
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.is_started()
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn speller(&self) -> &S {
        &self.speller
    }

    #[must_use]
    pub fn start_words(&self) -> &[String] {
        &self.start_words
    }
}

/// Points awarded for an accepted word: one per letter
#[inline]
#[must_use]
pub fn score_for(word: &str) -> usize {
    letter_count(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::WordListSpeller;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn speller() -> WordListSpeller {
        WordListSpeller::new(
            "en",
            ["silk", "worm", "milk", "silkworm", "slow", "owl", "sir", "kill", "zoo"],
        )
    }

    fn game() -> WordScramble<WordListSpeller> {
        let mut game =
            WordScramble::new(vec!["silkworm".to_string()], speller(), Rules::default()).unwrap();
        game.new_game();
        game
    }

    fn permissive_game() -> WordScramble<fn(&str, &str) -> bool> {
        let accept_all: fn(&str, &str) -> bool = |_, _| true;
        let mut game =
            WordScramble::new(vec!["silkworm".to_string()], accept_all, Rules::default()).unwrap();
        game.new_game();
        game
    }

    #[test]
    fn accepts_valid_word() {
        let mut game = game();
        let outcome = game.submit("silk").unwrap();

        assert_eq!(
            outcome,
            Submission::Accepted {
                word: "silk".to_string(),
                points: 4
            }
        );
        assert_eq!(game.score(), 4);
        assert_eq!(game.used_words(), ["silk"]);
    }

    #[test]
    fn accepted_words_are_prepended() {
        let mut game = game();
        game.submit("silk").unwrap();
        game.submit("owl").unwrap();
        game.submit("worm").unwrap();

        assert_eq!(game.used_words(), ["worm", "owl", "silk"]);
        assert_eq!(game.score(), 11);
    }

    #[test]
    fn input_is_normalized() {
        let mut game = game();
        game.submit("  SiLK\n").unwrap();
        assert_eq!(game.used_words(), ["silk"]);
    }

    #[test]
    fn decomposed_accents_score_one_point_per_letter() {
        let speller = WordListSpeller::new("fr", ["caf\u{e9}"]);
        let rules = Rules {
            language: "fr".to_string(),
            ..Rules::default()
        };
        let mut game = WordScramble::new(vec!["fac\u{e9}tie".to_string()], speller, rules).unwrap();
        game.start_with_root("face\u{301}tie");

        assert_eq!(
            game.submit("cafe\u{301}").unwrap(),
            Submission::Accepted {
                word: "caf\u{e9}".to_string(),
                points: 4
            }
        );
        assert_eq!(game.submit("caf\u{e9}"), Err(ValidationError::AlreadyUsed));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut game = game();
        assert_eq!(game.submit("").unwrap(), Submission::Empty);
        assert_eq!(game.submit(" \t\n").unwrap(), Submission::Empty);
        assert_eq!(game.score(), 0);
        assert!(game.used_words().is_empty());
    }

    #[test]
    fn root_word_is_already_used() {
        let mut game = game();
        assert_eq!(game.submit("silkworm"), Err(ValidationError::AlreadyUsed));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn repeat_word_is_already_used() {
        let mut game = game();
        game.submit("silk").unwrap();
        let before = game.state().clone();

        assert_eq!(game.submit("SILK"), Err(ValidationError::AlreadyUsed));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn missing_letters_are_unformable() {
        let mut game = game();
        assert_eq!(game.submit("zoo"), Err(ValidationError::Unformable));
        // real word, but only one 'l' in the root
        assert_eq!(game.submit("kill"), Err(ValidationError::Unformable));
    }

    #[test]
    fn unknown_word_is_not_a_word() {
        let mut game = game();
        assert_eq!(game.submit("slim"), Err(ValidationError::NotAWord));
    }

    #[test]
    fn short_word_is_too_short_after_other_checks() {
        let mut game = permissive_game();
        assert_eq!(game.submit("sk"), Err(ValidationError::TooShort));
        assert_eq!(game.submit("s"), Err(ValidationError::TooShort));
        assert!(game.used_words().is_empty());
    }

    #[test]
    fn short_word_fails_dictionary_first() {
        let mut game = game();
        assert_eq!(game.submit("sk"), Err(ValidationError::NotAWord));
    }

    #[test]
    fn originality_is_checked_before_possibility() {
        let mut game = permissive_game();
        game.submit("silk").unwrap();
        assert_eq!(game.submit("silk"), Err(ValidationError::AlreadyUsed));
    }

    #[test]
    fn possibility_is_checked_before_dictionary() {
        let mut game = game();
        // neither formable nor known
        assert_eq!(game.submit("qqq"), Err(ValidationError::Unformable));
    }

    #[test]
    fn language_mismatch_rejects_everything() {
        let rules = Rules {
            language: "fr".to_string(),
            ..Rules::default()
        };
        let mut game = WordScramble::new(vec!["silkworm".to_string()], speller(), rules).unwrap();
        game.new_game();
        assert_eq!(game.submit("silk"), Err(ValidationError::NotAWord));
    }

    #[test]
    fn custom_minimum_length() {
        let accept_all: fn(&str, &str) -> bool = |_, _| true;
        let rules = Rules {
            min_length: 5,
            ..Rules::default()
        };
        let mut game = WordScramble::new(vec!["silkworm".to_string()], accept_all, rules).unwrap();
        game.new_game();

        assert_eq!(game.submit("silk"), Err(ValidationError::TooShort));
        assert!(game.submit("works").is_ok());
    }

    #[test]
    fn not_started_game_rejects_as_unformable() {
        let mut game =
            WordScramble::new(vec!["silkworm".to_string()], speller(), Rules::default()).unwrap();
        assert!(!game.is_started());
        assert_eq!(game.submit("silk"), Err(ValidationError::Unformable));
        assert_eq!(game.submit("").unwrap(), Submission::Empty);
    }

    #[test]
    fn new_game_resets_state() {
        let mut game = game();
        game.submit("silk").unwrap();
        game.submit("worm").unwrap();

        game.new_game();
        assert_eq!(game.root_word(), "silkworm");
        assert_eq!(game.score(), 0);
        assert!(game.used_words().is_empty());

        // words from the previous game may be found again
        assert!(game.submit("silk").is_ok());
    }

    #[test]
    fn new_game_picks_from_start_words() {
        let words = vec![
            "silkworm".to_string(),
            "anything".to_string(),
            "blanket".to_string(),
        ];
        let mut game = WordScramble::new(words.clone(), speller(), Rules::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let root = game.new_game_with(&mut rng).to_string();
            assert!(words.contains(&root));
        }
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let words: Vec<String> = crate::wordlists::START_WORDS
            .iter()
            .map(|w| (*w).to_string())
            .collect();
        let mut first = WordScramble::new(words.clone(), speller(), Rules::default()).unwrap();
        let mut second = WordScramble::new(words, speller(), Rules::default()).unwrap();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            assert_eq!(
                first.new_game_with(&mut rng_a),
                second.new_game_with(&mut rng_b)
            );
        }
    }

    #[test]
    fn start_words_are_normalized() {
        let game = WordScramble::new(
            vec![" Silkworm ".to_string(), String::new()],
            speller(),
            Rules::default(),
        )
        .unwrap();
        assert_eq!(game.start_words(), ["silkworm"]);
    }

    #[test]
    fn empty_start_words_are_an_error() {
        let result = WordScramble::new(vec![String::new()], speller(), Rules::default());
        assert!(matches!(result, Err(WordListError::Empty { .. })));
    }

    #[test]
    fn score_counts_characters() {
        assert_eq!(score_for("silk"), 4);
        assert_eq!(score_for("café"), 4);
    }
}
