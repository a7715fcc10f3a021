//! Word lists for Word Scramble
//!
//! Provides the embedded root-word list and dictionary, plus loaders for custom files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;
