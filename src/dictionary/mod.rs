//! The word store
//!
//! A loaded dictionary holds its words twice over: an ordered list sorted by
//! descending length (the order the solver tries seeds and candidates in) and
//! a fingerprint index for constant-time membership checks from the board
//! validators.

mod bundled;
pub mod fingerprint;
pub mod loader;

pub use bundled::{BUNDLED, BUNDLED_COUNT};
pub use fingerprint::{fingerprint, fingerprint_cell};
pub use loader::{load_from_file, parse_words, DictionaryError};

use crate::core::{Letter, Word};
use rustc_hash::FxHashMap;

/// A read-only dictionary of playable words
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Words sorted by descending length, load order preserved within a length
    words: Vec<Word>,
    /// Fingerprint to indices into `words`; hits are verified by equality, so
    /// a colliding pair of words cannot produce a false positive
    index: FxHashMap<u32, Vec<u32>>,
}

impl Dictionary {
    /// Build a dictionary from parsed words
    ///
    /// Exact duplicates are dropped; the first occurrence wins.
    #[must_use]
    pub fn from_words(mut words: Vec<Word>) -> Self {
        // Stable sort keeps load order within each length class deterministic
        words.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut index: FxHashMap<u32, Vec<u32>> = FxHashMap::default();
        let mut kept: Vec<Word> = Vec::with_capacity(words.len());
        for word in words {
            let print = fingerprint(word.letters());
            let slot = index.entry(print).or_default();
            if slot
                .iter()
                .any(|&i| kept[i as usize].letters() == word.letters())
            {
                continue;
            }
            slot.push(kept.len() as u32);
            kept.push(word);
        }
        Self { words: kept, index }
    }

    /// The dictionary built from the bundled word list
    ///
    /// # Panics
    /// Panics if the generated bundled list contains an invalid entry, which
    /// the build script rules out.
    #[must_use]
    pub fn bundled() -> Self {
        let words = BUNDLED
            .iter()
            .map(|w| Word::new(w).expect("bundled word list is valid"))
            .collect();
        Self::from_words(words)
    }

    /// Whether a letter sequence is a dictionary word
    #[must_use]
    pub fn contains(&self, letters: &[Letter]) -> bool {
        let Some(indices) = self.index.get(&fingerprint(letters)) else {
            return false;
        };
        indices
            .iter()
            .any(|&i| self.words[i as usize].letters() == letters)
    }

    /// The words, longest first
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|w| Word::new(w).unwrap()).collect())
    }

    #[test]
    fn sorted_by_descending_length() {
        let dict = dictionary(&["AT", "CATS", "CAT", "RATS"]);
        let lengths: Vec<usize> = dict.words().iter().map(Word::len).collect();
        assert_eq!(lengths, vec![4, 4, 3, 2]);
        // Load order preserved within the same length
        assert_eq!(dict.words()[0].to_string(), "CATS");
        assert_eq!(dict.words()[1].to_string(), "RATS");
    }

    #[test]
    fn membership() {
        let dict = dictionary(&["CAT", "RAT", "AT"]);
        assert!(dict.contains(Word::new("CAT").unwrap().letters()));
        assert!(dict.contains(Word::new("AT").unwrap().letters()));
        assert!(!dict.contains(Word::new("TAC").unwrap().letters()));
        assert!(!dict.contains(Word::new("CATS").unwrap().letters()));
    }

    #[test]
    fn duplicates_dropped() {
        let dict = dictionary(&["CAT", "CAT", "RAT"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn bundled_loads() {
        let dict = Dictionary::bundled();
        assert_eq!(dict.len(), BUNDLED_COUNT);
        assert!(dict.contains(Word::new("BAN").unwrap().letters()));
        assert!(dict.contains(Word::new("CAT").unwrap().letters()));
        assert!(dict.contains(Word::new("AT").unwrap().letters()));
        // Longest first
        let first = dict.words()[0].len();
        let last = dict.words()[dict.len() - 1].len();
        assert!(first >= last);
        assert!(last >= 2);
    }
}
