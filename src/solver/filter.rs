//! Candidate word filters
//!
//! Cheap multiset checks that shrink the word list before the search touches
//! the board. A word that cannot be assembled from the tiles in reach can
//! never be placed, so filtering here saves full placement attempts.

use crate::core::{Hand, Letter, Word, ALPHABET_SIZE};
use rustc_hash::FxHashSet;

/// Whether `word` can be built from the hand alone
#[must_use]
pub fn is_makeable(word: &Word, hand: &Hand) -> bool {
    let mut available = *hand;
    word.letters().iter().all(|&letter| available.take(letter))
}

/// Whether `word` could be played after the seed word is on the board
///
/// A word crossing the seed line shares exactly one cell with it, so a
/// playable word must come from the remaining hand plus at most one letter
/// that the seed placed. The borrowed letter is not consumed: a second
/// shortfall, even of the same letter, fails.
#[must_use]
pub fn playable_after_seed(hand: &Hand, word: &Word, seed_letters: &FxHashSet<Letter>) -> bool {
    let mut counts: [i32; ALPHABET_SIZE] = [0; ALPHABET_SIZE];
    for (slot, &count) in counts.iter_mut().zip(hand.counts()) {
        *slot = i32::from(count);
    }
    let mut borrowed = false;
    for &letter in word.letters() {
        let count = &mut counts[letter as usize];
        if *count <= 0 {
            if borrowed || !seed_letters.contains(&letter) {
                return false;
            }
            borrowed = true;
        } else {
            *count -= 1;
        }
    }
    true
}

/// Whether `word` could be played given the letters now on the board
///
/// Used to re-filter candidates at each recursion level. Shortfalls are
/// covered by letters actually present on the board, consuming them, and at
/// most `board_letter_limit` may be borrowed in total for this word.
#[must_use]
pub fn playable_with_board(
    hand: &Hand,
    on_board: &Hand,
    word: &Word,
    board_letter_limit: usize,
) -> bool {
    let mut in_hand = *hand;
    let mut available = *on_board;
    let mut borrowed = 0usize;
    for &letter in word.letters() {
        if in_hand.take(letter) {
            continue;
        }
        if borrowed == board_letter_limit || !available.take(letter) {
            return false;
        }
        borrowed += 1;
    }
    true
}
