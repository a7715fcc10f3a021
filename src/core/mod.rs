//! Core domain types for Word Scramble
//!
//! Pure building blocks: candidate normalization, the letter-pool
//! check, validation errors and the game state the UI reads.

mod candidate;
mod error;
mod state;

pub use candidate::{is_formable, letter_count, letters, normalize};
pub use error::ValidationError;
pub use state::GameState;

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 3;
