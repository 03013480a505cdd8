//! Core domain types
//!
//! The board, hands, words, and play records the solver operates on. Pure
//! data and board mechanics; the search itself lives in `solver`.

mod board;
mod letters;
mod placement;
mod word;

pub use board::{Board, Direction, PlayOutcome, Rect, BOARD_SIZE, EMPTY};
pub use letters::{letter_char, letter_index, Hand, HandDelta, HandError, Letter, ALPHABET_SIZE};
pub use placement::{Placement, PlaySequence};
pub use word::{Word, WordError};

pub(crate) use word::MAX_WORD_LEN;
