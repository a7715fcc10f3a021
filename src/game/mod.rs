//! Word Scramble game logic
//!
//! The engine that validates submissions and keeps score, plus offline analysis of
//! root words.

pub mod analysis;
mod engine;

pub use analysis::{RootAnalysis, analyze_root};
pub use engine::{Rules, Submission, WordScramble, score_for};
