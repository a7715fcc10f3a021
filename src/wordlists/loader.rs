//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{DICTIONARY, START_WORDS};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source name selecting the list compiled into the binary
pub const EMBEDDED: &str = "embedded";

/// Failure to produce a usable word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {origin} contains no words")]
    Empty { origin: String },
}

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read, and
/// [`WordListError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            origin: path.display().to_string(),
        });
    }

    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Root words from `source`: [`EMBEDDED`] or a path
///
/// # Errors
///
/// Propagates [`load_from_file`] errors for path sources.
pub fn load_start_words(source: &str) -> Result<Vec<String>, WordListError> {
    match source {
        EMBEDDED => Ok(words_from_slice(START_WORDS)),
        path => load_from_file(path),
    }
}

/// Dictionary words from `source`: [`EMBEDDED`] or a path
///
/// # Errors
///
/// Propagates [`load_from_file`] errors for path sources.
pub fn load_dictionary(source: &str) -> Result<Vec<String>, WordListError> {
    match source {
        EMBEDDED => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_lines_skips_blanks_and_normalizes() {
        let words = parse_lines("Silkworm\n\n  anything \r\nblanket\n");
        assert_eq!(words, vec!["silkworm", "anything", "blanket"]);
    }

    #[test]
    fn parse_lines_trailing_newline_adds_nothing() {
        assert_eq!(parse_lines("silkworm\n").len(), 1);
        assert!(parse_lines("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["silkworm", "anything"]);
        assert_eq!(words, vec!["silkworm", "anything"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("reads", "silkworm\nanything\n");
        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["silkworm", "anything"]);
        fs::remove_file(path).ok();
    }

    #[test]
    fn load_from_file_missing_is_io_error() {
        let result = load_from_file("/definitely/not/here/start.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_file_blank_is_empty_error() {
        let path = temp_file("blank", "\n  \n");
        let result = load_from_file(&path);
        assert!(matches!(result, Err(WordListError::Empty { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn embedded_sources() {
        assert_eq!(load_start_words(EMBEDDED).unwrap().len(), START_WORDS.len());
        assert_eq!(load_dictionary(EMBEDDED).unwrap().len(), DICTIONARY.len());
    }
}
