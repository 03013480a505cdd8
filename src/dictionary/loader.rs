//! Word list loading
//!
//! Parses dictionary text into the engine's word form: one word per line,
//! blank lines skipped, letters upper-cased, one-letter words dropped.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use super::Dictionary;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list file could not be read
    Io(io::Error),
    /// A line held something other than letters A-Z
    InvalidWord {
        /// 1-based line number in the source text
        line: usize,
        /// The offending entry, trimmed
        entry: String,
        /// What was wrong with it
        source: WordError,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::InvalidWord { line, entry, source } => {
                write!(f, "Bad dictionary entry {entry:?} on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse dictionary text into words
///
/// Words shorter than two letters are dropped: they can never appear as a
/// board run.
///
/// # Errors
/// Returns `DictionaryError::InvalidWord` for any line that is not letters
/// A-Z after trimming and upper-casing.
pub fn parse_words(text: &str) -> Result<Vec<Word>, DictionaryError> {
    let mut words = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| DictionaryError::InvalidWord {
            line: index + 1,
            entry: trimmed.to_string(),
            source,
        })?;
        if word.len() >= 2 {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load a dictionary from a word list file
///
/// # Errors
/// Returns an error if the file cannot be read or contains an entry outside
/// A-Z.
///
/// # Examples
/// ```no_run
/// use bananagrams_solver::dictionary::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(parse_words(&content)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_short_words() {
        let words = parse_words("CAT\n\n  \nA\nrat\n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].to_string(), "CAT");
        assert_eq!(words[1].to_string(), "RAT");
    }

    #[test]
    fn parse_uppercases_and_trims() {
        let words = parse_words("  banana  \n").unwrap();
        assert_eq!(words[0].to_string(), "BANANA");
    }

    #[test]
    fn parse_rejects_non_alpha() {
        let err = parse_words("CAT\nDON'T\n").unwrap_err();
        match err {
            DictionaryError::InvalidWord { line, entry, .. } => {
                assert_eq!(line, 2);
                assert_eq!(entry, "DON'T");
            }
            other => panic!("expected InvalidWord, got {other}"),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io(_)));
    }
}
