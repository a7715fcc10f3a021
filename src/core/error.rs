//! Validation errors surfaced to the player

use thiserror::Error;

/// Why a submitted word was rejected
///
/// Each kind maps to an alert with a title and a message. `Display` renders the
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The word is the root word or was already accepted this game
    #[error("Be more original")]
    AlreadyUsed,
    /// The root word does not hold enough of the word's letters
    #[error("Word is impossible to form with given letters")]
    Unformable,
    /// The spell checker does not recognize the word
    #[error("Word does not exist")]
    NotAWord,
    /// Fewer letters than the minimum word length
    #[error("Think harder.")]
    TooShort,
}

impl ValidationError {
    /// All error kinds in the order the checks run
    pub const ALL: [Self; 4] = [
        Self::AlreadyUsed,
        Self::Unformable,
        Self::NotAWord,
        Self::TooShort,
    ];

    /// Alert title shown above the message
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word was already entered",
            Self::Unformable => "Think carefully",
            Self::NotAWord => "No cheating",
            Self::TooShort => "Word too short",
        }
    }

    /// Alert body
    #[must_use]
    pub fn message(self) -> String {
        self.to_string()
    }
}
