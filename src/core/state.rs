//! Game state read by the presentation layer

/// Root word, accepted words and score for the current game
///
/// `used_words` is ordered most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: usize,
}

impl GameState {
    /// Fresh state for a new root word
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Whether a game has been started
    #[inline]
    #[must_use]
    pub fn is_started(&self) -> bool {
        !self.root_word.is_empty()
    }

    /// Whether `word` was already accepted this game
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Record an accepted word and add its points
    pub(crate) fn accept(&mut self, word: String, points: usize) {
        self.score += points;
        self.used_words.insert(0, word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_started() {
        let state = GameState::default();
        assert!(!state.is_started());
        assert_eq!(state.score, 0);
        assert!(state.used_words.is_empty());
    }

    #[test]
    fn accept_prepends_and_scores() {
        let mut state = GameState::new("silkworm");
        state.accept("silk".to_string(), 4);
        state.accept("worm".to_string(), 4);

        assert_eq!(state.used_words, vec!["worm", "silk"]);
        assert_eq!(state.score, 8);
        assert!(state.is_used("silk"));
        assert!(!state.is_used("milk"));
    }
}
