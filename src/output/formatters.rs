//! Display-grid conversion
//!
//! Turns a solved board into a trimmed grid of display cells: `" "` for
//! empty, a letter, or a letter followed by `"*"` for tiles that carried
//! over from the previous solution.

use crate::core::{letter_char, Board, PlaySequence, Rect, EMPTY};
use crate::dictionary::fingerprint_cell;
use crate::solver::Solution;
use rustc_hash::FxHashSet;

/// Convert a board region to display cells
///
/// `starred` holds fingerprinted coordinates of cells to mark as carried
/// over.
#[must_use]
pub fn board_grid(board: &Board, bounds: Rect, starred: &FxHashSet<u32>) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(bounds.max_row - bounds.min_row + 1);
    for row in bounds.min_row..=bounds.max_row {
        let mut cells = Vec::with_capacity(bounds.max_col - bounds.min_col + 1);
        for col in bounds.min_col..=bounds.max_col {
            let val = board.get(row, col);
            if val == EMPTY {
                cells.push(" ".to_string());
            } else if starred.contains(&fingerprint_cell(row, col)) {
                cells.push(format!("{}*", letter_char(val)));
            } else {
                cells.push(letter_char(val).to_string());
            }
        }
        grid.push(cells);
    }
    grid
}

/// The display grid for a solution, starring tiles shared with a prior game
#[must_use]
pub fn solution_grid(solution: &Solution, prior: Option<&PlaySequence>) -> Vec<Vec<String>> {
    let starred = prior
        .map(|sequence| solution.sequence().shared_prefix_cells(sequence))
        .unwrap_or_default();
    board_grid(solution.board(), solution.bounds(), &starred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Placement, Word};

    fn cat_sequence() -> PlaySequence {
        let mut seq = PlaySequence::new();
        seq.push(Placement {
            word: Word::new("CAT").unwrap(),
            row: 72,
            col: 70,
            dir: Direction::Horizontal,
        });
        seq
    }

    #[test]
    fn grid_covers_bounds_with_blanks() {
        let mut seq = cat_sequence();
        seq.push(Placement {
            word: Word::new("TAR").unwrap(),
            row: 72,
            col: 72,
            dir: Direction::Vertical,
        });
        let (board, bounds) = seq.to_board().unwrap();
        let grid = board_grid(&board, bounds, &FxHashSet::default());
        assert_eq!(
            grid,
            vec![
                vec!["C", "A", "T"],
                vec![" ", " ", "A"],
                vec![" ", " ", "R"],
            ]
        );
    }

    #[test]
    fn starred_cells_marked() {
        let (board, bounds) = cat_sequence().to_board().unwrap();
        let mut starred = FxHashSet::default();
        starred.insert(fingerprint_cell(72, 70));
        let grid = board_grid(&board, bounds, &starred);
        assert_eq!(grid, vec![vec!["C*", "A", "T"]]);
    }
}
