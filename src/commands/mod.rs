//! Command implementations

pub mod analyze;
pub mod simple;
pub mod survey;

pub use analyze::analyze_word;
pub use simple::{run_simple, run_simple_with};
pub use survey::{SurveyResult, run_survey};
