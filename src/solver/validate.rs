//! Board validators
//!
//! After a placement, every maximal run of two or more letters that the new
//! word touches must be a dictionary word. Only the played line and the lines
//! crossing it can have changed, so only those are scanned, and never outside
//! the current bounding rectangle. Connectedness is not checked here; the
//! anchor rule in `Board::play_word` enforces it.

use crate::core::{Board, Direction, Rect, EMPTY, MAX_WORD_LEN};
use crate::dictionary::Dictionary;

/// Validate the board after a word was played horizontally
///
/// Scans the played row once, then the column through each cell of the span.
#[must_use]
pub fn board_valid_after_horizontal(
    board: &Board,
    bounds: Rect,
    row: usize,
    start_col: usize,
    end_col: usize,
    dict: &Dictionary,
) -> bool {
    let from = run_start(board, Direction::Horizontal, row, start_col, bounds.min_col);
    if !line_runs_valid(board, dict, Direction::Horizontal, row, from, bounds.max_col, end_col) {
        return false;
    }
    for col in start_col..=end_col {
        let from = run_start(board, Direction::Vertical, col, row, bounds.min_row);
        if !line_runs_valid(board, dict, Direction::Vertical, col, from, bounds.max_row, row) {
            return false;
        }
    }
    true
}

/// Validate the board after a word was played vertically
///
/// Mirror image of [`board_valid_after_horizontal`].
#[must_use]
pub fn board_valid_after_vertical(
    board: &Board,
    bounds: Rect,
    start_row: usize,
    end_row: usize,
    col: usize,
    dict: &Dictionary,
) -> bool {
    let from = run_start(board, Direction::Vertical, col, start_row, bounds.min_row);
    if !line_runs_valid(board, dict, Direction::Vertical, col, from, bounds.max_row, end_row) {
        return false;
    }
    for row in start_row..=end_row {
        let from = run_start(board, Direction::Horizontal, row, col, bounds.min_col);
        if !line_runs_valid(board, dict, Direction::Horizontal, row, from, bounds.max_col, col) {
            return false;
        }
    }
    true
}

/// The cell at position `i` along a line
///
/// A horizontal line fixes the row and varies the column; a vertical line the
/// reverse.
#[inline]
fn cell_along(board: &Board, dir: Direction, fixed: usize, i: usize) -> u8 {
    match dir {
        Direction::Horizontal => board.get(fixed, i),
        Direction::Vertical => board.get(i, fixed),
    }
}

/// Walk backwards from `from` to the start of the contiguous run containing it
fn run_start(board: &Board, dir: Direction, fixed: usize, from: usize, lower: usize) -> usize {
    let mut i = from;
    while i > lower {
        if cell_along(board, dir, fixed, i) == EMPTY {
            i += 1;
            break;
        }
        i -= 1;
    }
    i.max(lower)
}

/// Check every complete run on a line between `start` and `end`
///
/// Stops early at the first empty cell past `stop_after` (the far end of the
/// played span): runs beyond it cannot have changed.
fn line_runs_valid(
    board: &Board,
    dict: &Dictionary,
    dir: Direction,
    fixed: usize,
    start: usize,
    end: usize,
    stop_after: usize,
) -> bool {
    let mut run: Vec<u8> = Vec::with_capacity(MAX_WORD_LEN);
    for i in start..=end {
        let val = cell_along(board, dir, fixed, i);
        if val != EMPTY {
            run.push(val);
        } else {
            if run.len() > 1 && !dict.contains(&run) {
                return false;
            }
            run.clear();
            if i > stop_after {
                break;
            }
        }
    }
    run.len() <= 1 || dict.contains(&run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlaySequence, Placement, Word};

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|w| Word::new(w).unwrap()).collect())
    }

    fn board_of(placements: &[(&str, usize, usize, Direction)]) -> (Board, Rect) {
        let mut seq = PlaySequence::new();
        for &(text, row, col, dir) in placements {
            seq.push(Placement {
                word: Word::new(text).unwrap(),
                row,
                col,
                dir,
            });
        }
        seq.to_board().unwrap()
    }

    #[test]
    fn accepts_clean_cross() {
        let dict = dictionary(&["CAT", "RAT"]);
        let (board, bounds) = board_of(&[
            ("CAT", 72, 70, Direction::Horizontal),
            ("RAT", 71, 71, Direction::Vertical),
        ]);
        assert!(board_valid_after_vertical(&board, bounds, 71, 73, 71, &dict));
    }

    #[test]
    fn rejects_invalid_cross_word() {
        // RAT crosses CAT cleanly, but this dictionary has no RAT
        let dict = dictionary(&["CAT", "RAM"]);
        let (board, bounds) = board_of(&[
            ("CAT", 72, 70, Direction::Horizontal),
            ("RAT", 71, 71, Direction::Vertical),
        ]);
        assert!(!board_valid_after_vertical(&board, bounds, 71, 73, 71, &dict));
    }

    #[test]
    fn rejects_accidental_adjacent_run() {
        let dict = dictionary(&["CAT", "TO", "ON"]);
        // TO played directly beneath CA forms vertical CT and AO
        let (board, bounds) = board_of(&[
            ("CAT", 72, 70, Direction::Horizontal),
            ("TO", 73, 70, Direction::Horizontal),
        ]);
        assert!(!board_valid_after_horizontal(&board, bounds, 73, 70, 71, &dict));
    }

    #[test]
    fn accepts_parallel_word_with_valid_crossings() {
        // AT above TO: the columns read AT and TO, both words
        let dict = dictionary(&["AT", "TO"]);
        let (board, bounds) = board_of(&[
            ("AT", 72, 70, Direction::Horizontal),
            ("TO", 73, 70, Direction::Horizontal),
        ]);
        assert!(board_valid_after_horizontal(&board, bounds, 73, 70, 71, &dict));
    }

    #[test]
    fn validates_extension_of_existing_run() {
        let dict = dictionary(&["CAT", "CATS", "RATS", "RAT"]);
        // S appended after CAT must form CATS on the row
        let (mut board, bounds) = board_of(&[("CAT", 72, 70, Direction::Horizontal)]);
        let bounds = bounds.union(Rect::cell(72, 73));
        board.set(72, 73, 18); // S
        assert!(board_valid_after_horizontal(&board, bounds, 72, 73, 73, &dict));
    }

    #[test]
    fn single_letters_are_not_words() {
        let dict = dictionary(&["CAT"]);
        let (board, bounds) = board_of(&[("CAT", 72, 70, Direction::Horizontal)]);
        // The played row holds CAT; each column is a single letter, fine
        assert!(board_valid_after_horizontal(&board, bounds, 72, 70, 72, &dict));
    }
}
