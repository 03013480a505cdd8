//! Word representation
//!
//! A Word stores its letters as indices 0 ('A') to 25 ('Z'), the form the
//! board and dictionary work in.

use super::letters::{letter_char, letter_index, Letter};
use std::fmt;

/// Capacity hint for letter buffers; no dictionary word is longer than this.
pub(crate) const MAX_WORD_LEN: usize = 17;

/// A word as a sequence of letter indices
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The word was empty after trimming
    Empty,
    /// A character outside A-Z was found
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains {c:?}: only letters A-Z are allowed")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a word from a string
    ///
    /// Leading and trailing whitespace is trimmed and letters are upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed string is empty or contains a
    /// character outside A-Z.
    pub fn new(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }
        let letters = trimmed
            .chars()
            .map(|c| letter_index(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { letters })
    }

    /// A one-letter word, used to record single-tile placements
    #[must_use]
    pub fn single(letter: Letter) -> Self {
        Self {
            letters: vec![letter],
        }
    }

    /// The letters as indices
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the word has no letters (never true for a constructed `Word`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter_char(letter))?;
        }
        Ok(())
    }
}
