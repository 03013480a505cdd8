//! Board representation
//!
//! A Board is a flat 144x144 grid of cells, each holding a letter index or the
//! empty sentinel. Words are played and undone in place; the solver relies on
//! every play being exactly reversible.

use super::letters::{letter_char, Hand};
use super::word::{Word, MAX_WORD_LEN};
use std::fmt;

/// Rows/columns in the board
pub const BOARD_SIZE: usize = 144;

/// Value of an empty cell; fits in a byte and lies outside 0..26
pub const EMPTY: u8 = 30;

/// The direction a word is played in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Direction {
    /// Per-step (row, col) increments along the word
    #[inline]
    #[must_use]
    pub const fn deltas(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// An inclusive axis-aligned rectangle of board cells
///
/// Tracks the occupied region during a solve. Placements only ever widen it;
/// because each recursion frame carries its own copy, backtracking restores
/// the parent's rectangle without bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_col: usize,
    pub max_col: usize,
    pub min_row: usize,
    pub max_row: usize,
}

impl Rect {
    /// A rectangle covering a single cell
    #[must_use]
    pub const fn cell(row: usize, col: usize) -> Self {
        Self {
            min_col: col,
            max_col: col,
            min_row: row,
            max_row: row,
        }
    }

    /// The footprint of a word played from `(row, col)` in `dir`
    #[must_use]
    pub const fn of_word(row: usize, col: usize, len: usize, dir: Direction) -> Self {
        match dir {
            Direction::Horizontal => Self {
                min_col: col,
                max_col: col + len - 1,
                min_row: row,
                max_row: row,
            },
            Direction::Vertical => Self {
                min_col: col,
                max_col: col,
                min_row: row,
                max_row: row + len - 1,
            },
        }
    }

    /// The smallest rectangle covering both `self` and `other`
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_col: self.min_col.min(other.min_col),
            max_col: self.max_col.max(other.max_col),
            min_row: self.min_row.min(other.min_row),
            max_row: self.max_row.max(other.max_row),
        }
    }

    /// Whether `(row, col)` lies inside the rectangle
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }
}

/// Result of attempting to play a word on the board
///
/// The index lists name exactly the cells this attempt wrote. On `Rejected`
/// the caller must pass them to [`Board::undo_play`]; the attempt may have
/// written a prefix of the word before failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The word was placed and the hand is now empty
    Finished {
        /// Cells written by this placement
        cells: Vec<(usize, usize)>,
    },
    /// The word was placed; tiles remain in the hand
    Remaining {
        /// Cells written by this placement
        cells: Vec<(usize, usize)>,
        /// The hand after consuming this word's new letters
        hand: Hand,
    },
    /// The word cannot be played here (no anchor, letter conflict, hand
    /// exhausted mid-word, or nothing new written)
    Rejected {
        /// Cells written before the attempt failed; must be undone
        cells: Vec<(usize, usize)>,
    },
    /// The word would run past the edge of the grid
    OutOfBounds,
}

/// The current board
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<u8>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![EMPTY; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// The value at `(row, col)`
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * BOARD_SIZE + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, val: u8) {
        self.cells[row * BOARD_SIZE + col] = val;
    }

    /// Whether the cell at `(row, col)` holds a letter
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != EMPTY
    }

    /// The raw row-major cell array
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The tight bounding rectangle of all occupied cells, if any
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_occupied(row, col) {
                    let cell = Rect::cell(row, col);
                    bounds = Some(match bounds {
                        Some(b) => b.union(cell),
                        None => cell,
                    });
                }
            }
        }
        bounds
    }

    /// Write a word without anchor or hand checks
    ///
    /// Used for seed words on an empty board and for replaying a recorded
    /// sequence. Cells already holding the same letter are left alone; the
    /// returned list names only the newly written cells.
    pub(crate) fn write_word(
        &mut self,
        word: &Word,
        row: usize,
        col: usize,
        dir: Direction,
    ) -> Vec<(usize, usize)> {
        let (dr, dc) = dir.deltas();
        let mut written = Vec::with_capacity(word.len());
        for (i, &letter) in word.letters().iter().enumerate() {
            let (r, c) = (row + dr * i, col + dc * i);
            if !self.is_occupied(r, c) {
                self.set(r, c, letter);
                written.push((r, c));
            }
        }
        written
    }

    /// Attempt to play a word at `(row, col)` in `dir`
    ///
    /// The placement must touch the existing occupied region: the cell before
    /// the start, the cell after the end, or any cell bordering the span on
    /// the perpendicular axis must hold a letter. Walking the span, empty
    /// cells are written (consuming from a copy of `hand`), matching letters
    /// are overlapped, and a differing letter rejects the attempt.
    ///
    /// `on_board` is kept in sync with the letters written; `undo_play`
    /// reverses it.
    pub fn play_word(
        &mut self,
        word: &Word,
        row: usize,
        col: usize,
        dir: Direction,
        hand: &Hand,
        on_board: &mut Hand,
    ) -> PlayOutcome {
        let len = word.len();
        let past_edge = match dir {
            Direction::Horizontal => col + len >= BOARD_SIZE,
            Direction::Vertical => row + len >= BOARD_SIZE,
        };
        if past_edge {
            return PlayOutcome::OutOfBounds;
        }
        if !self.touches_existing(row, col, len, dir) {
            return PlayOutcome::Rejected { cells: Vec::new() };
        }

        let (dr, dc) = dir.deltas();
        let mut remaining = *hand;
        let mut cells: Vec<(usize, usize)> = Vec::with_capacity(MAX_WORD_LEN);
        for (i, &letter) in word.letters().iter().enumerate() {
            let (r, c) = (row + dr * i, col + dc * i);
            let current = self.get(r, c);
            if current == EMPTY {
                if !remaining.take(letter) {
                    // Hand exhausted for this letter; caller undoes the prefix
                    return PlayOutcome::Rejected { cells };
                }
                self.set(r, c, letter);
                on_board.add(letter);
                cells.push((r, c));
            } else if current != letter {
                return PlayOutcome::Rejected { cells };
            }
        }
        if cells.is_empty() {
            // Entirely overlapping an existing word places nothing
            return PlayOutcome::Rejected { cells };
        }
        if remaining.is_empty() {
            PlayOutcome::Finished { cells }
        } else {
            PlayOutcome::Remaining {
                cells,
                hand: remaining,
            }
        }
    }

    /// Reset the listed cells to empty, reversing a play
    pub fn undo_play(&mut self, cells: &[(usize, usize)], on_board: &mut Hand) {
        for &(row, col) in cells {
            let letter = self.get(row, col);
            debug_assert_ne!(letter, EMPTY, "undoing a cell that was never played");
            on_board.take(letter);
            self.set(row, col, EMPTY);
        }
    }

    /// Whether a span at `(row, col)` in `dir` borders the occupied region
    fn touches_existing(&self, row: usize, col: usize, len: usize, dir: Direction) -> bool {
        let (dr, dc) = dir.deltas();
        let before = match dir {
            Direction::Horizontal => col > 0 && self.is_occupied(row, col - 1),
            Direction::Vertical => row > 0 && self.is_occupied(row - 1, col),
        };
        // Bounds were checked first, so the cell just past the end is on the grid
        let after = match dir {
            Direction::Horizontal => self.is_occupied(row, col + len),
            Direction::Vertical => self.is_occupied(row + len, col),
        };
        if before || after {
            return true;
        }
        (0..len).any(|i| {
            let (r, c) = (row + dr * i, col + dc * i);
            match dir {
                Direction::Horizontal => {
                    (r > 0 && self.is_occupied(r - 1, c))
                        || (r < BOARD_SIZE - 1 && self.is_occupied(r + 1, c))
                }
                Direction::Vertical => {
                    (c > 0 && self.is_occupied(r, c - 1))
                        || (c < BOARD_SIZE - 1 && self.is_occupied(r, c + 1))
                }
            }
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounding_box() {
            None => write!(f, "Board(empty)"),
            Some(bounds) => {
                writeln!(f, "Board({bounds:?})")?;
                for row in bounds.min_row..=bounds.max_row {
                    for col in bounds.min_col..=bounds.max_col {
                        let val = self.get(row, col);
                        if val == EMPTY {
                            write!(f, ".")?;
                        } else {
                            write!(f, "{}", letter_char(val))?;
                        }
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}
