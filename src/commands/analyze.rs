//! Root word analysis command
//!
//! Lists every word a root word yields and the best score a player could reach.

use crate::core::normalize;
use crate::game::{RootAnalysis, Rules, analyze_root};
use anyhow::{Result, bail};

/// Analyze a root word against a dictionary
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn analyze_word(root: &str, dictionary: &[&str], rules: &Rules) -> Result<RootAnalysis> {
    let root = normalize(root);
    if root.is_empty() {
        bail!("Root word must not be empty");
    }

    Ok(analyze_root(&root, dictionary, rules))
}
