//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//! Every submission must be original, formable from the root's letters, a real word
//! and at least three letters long. Each accepted word scores one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::game::{Rules, WordScramble};
//! use word_scramble::speller::WordListSpeller;
//! use word_scramble::core::ValidationError;
//!
//! let speller = WordListSpeller::new("en", ["silk", "worm"]);
//! let mut game = WordScramble::new(vec!["silkworm".into()], speller, Rules::default()).unwrap();
//! game.start_with_root("silkworm");
//!
//! assert!(game.submit("silk").is_ok());
//! assert_eq!(game.submit("silkworm"), Err(ValidationError::AlreadyUsed));
//! assert_eq!(game.score(), 4);
//! ```

// Core domain types
pub mod core;

// Game engine and root word analysis
pub mod game;

// Spell checking
pub mod speller;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Diagnostic logging
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
