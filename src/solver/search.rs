//! The recursive placement search
//!
//! Depth-first search over (word, position, direction) placements. Each
//! accepted placement is validated, recorded, and recursed on; every exit
//! path undoes exactly the cells it wrote, so the board a frame sees on
//! return is the board it started with.

use crate::core::{
    Board, Direction, Hand, PlayOutcome, Placement, PlaySequence, Rect, Word, BOARD_SIZE,
};
use crate::dictionary::Dictionary;

use super::filter::playable_with_board;
use super::validate::{board_valid_after_horizontal, board_valid_after_vertical};

/// Result of a search at one recursion depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// Every tile is on the board; carries the final bounding rectangle
    Solved(Rect),
    /// All word/position combinations tried without success
    Exhausted,
    /// The words-checked budget ran out
    OutOfBudget,
}

/// Result of one placement attempt at a specific cell
enum CellStep {
    /// This placement completed the board
    Solved(Rect),
    /// Nothing worked here; the board is unchanged
    Nothing,
    /// The budget ran out somewhere below this placement
    OutOfBudget,
    /// The word ran past the grid edge; positions further along only get worse
    PastEdge,
}

/// Mutable state threaded through the recursion
pub(crate) struct Search<'a> {
    pub dict: &'a Dictionary,
    pub board: &'a mut Board,
    /// Letters currently on the board, kept in sync by play/undo
    pub on_board: Hand,
    /// Placements made so far, seed first
    pub play_seq: PlaySequence,
    /// A previous solution's sequence to reconstruct before searching
    pub prior_seq: Option<&'a PlaySequence>,
    /// Outer placement attempts made so far
    pub words_checked: usize,
    /// Most board letters one candidate word may reuse
    pub board_letter_limit: usize,
    /// Budget: give up once `words_checked` passes this
    pub max_words_to_check: usize,
}

impl<'a> Search<'a> {
    /// Try to place every remaining tile, starting from the current board
    ///
    /// `candidates` is already filtered for what the hand plus the board can
    /// supply at this depth. Odd depths try horizontal placements first, even
    /// depths vertical; successive words tend to cross when the orientation
    /// alternates, which is what makes the search converge.
    pub fn play_further(
        &mut self,
        bounds: Rect,
        candidates: &[&'a Word],
        hand: Hand,
        depth: usize,
    ) -> SearchOutcome {
        if let Some(prior) = self.prior_seq {
            if depth + 1 < prior.len() {
                let placement = prior
                    .get(depth + 1)
                    .expect("index below sequence length")
                    .clone();
                return self.replay_step(bounds, candidates, hand, depth, &placement);
            }
        }

        let order = if depth % 2 == 1 {
            [Direction::Horizontal, Direction::Vertical]
        } else {
            [Direction::Vertical, Direction::Horizontal]
        };
        for dir in order {
            // The seed is horizontal, so a horizontal word at depth 0 would
            // need a vertical cross the first pass already rejected
            if depth == 0 && dir == Direction::Horizontal {
                continue;
            }
            for &word in candidates {
                self.words_checked += 1;
                if self.words_checked > self.max_words_to_check {
                    return SearchOutcome::OutOfBudget;
                }
                match self.try_word(word, dir, bounds, candidates, hand, depth) {
                    SearchOutcome::Exhausted => {}
                    decided => return decided,
                }
            }
        }
        SearchOutcome::Exhausted
    }

    /// Re-apply one placement from a prior solution
    ///
    /// No alternatives are tried: if the recorded placement no longer fits,
    /// the whole reconstruction fails and the caller falls back to a fresh
    /// solve.
    fn replay_step(
        &mut self,
        bounds: Rect,
        candidates: &[&'a Word],
        hand: Hand,
        depth: usize,
        placement: &Placement,
    ) -> SearchOutcome {
        let outcome = self.board.play_word(
            &placement.word,
            placement.row,
            placement.col,
            placement.dir,
            &hand,
            &mut self.on_board,
        );
        match outcome {
            PlayOutcome::OutOfBounds => SearchOutcome::Exhausted,
            PlayOutcome::Rejected { cells } => {
                self.board.undo_play(&cells, &mut self.on_board);
                SearchOutcome::Exhausted
            }
            PlayOutcome::Finished { cells } => {
                let new_bounds = bounds.union(placement.footprint());
                if self.placement_valid(placement, new_bounds) {
                    self.play_seq.push(placement.clone());
                    SearchOutcome::Solved(new_bounds)
                } else {
                    self.board.undo_play(&cells, &mut self.on_board);
                    SearchOutcome::Exhausted
                }
            }
            PlayOutcome::Remaining { cells, hand: rest } => {
                let new_bounds = bounds.union(placement.footprint());
                if !self.placement_valid(placement, new_bounds) {
                    self.board.undo_play(&cells, &mut self.on_board);
                    return SearchOutcome::Exhausted;
                }
                self.play_seq.push(placement.clone());
                let next = self.refilter(candidates, &hand);
                match self.play_further(new_bounds, &next, rest, depth + 1) {
                    SearchOutcome::Solved(b) => SearchOutcome::Solved(b),
                    other => {
                        self.play_seq.pop();
                        self.board.undo_play(&cells, &mut self.on_board);
                        other
                    }
                }
            }
        }
    }

    /// Try one word in one direction at every halo position
    fn try_word(
        &mut self,
        word: &'a Word,
        dir: Direction,
        bounds: Rect,
        candidates: &[&'a Word],
        hand: Hand,
        depth: usize,
    ) -> SearchOutcome {
        match dir {
            Direction::Horizontal => {
                let row_hi = (bounds.max_row + 1).min(BOARD_SIZE - 1);
                for row in bounds.min_row.saturating_sub(1)..=row_hi {
                    let (leftmost, rightmost) =
                        col_limits(self.board, row, bounds.min_col, bounds.max_col);
                    let col_hi = (rightmost + 1).min(BOARD_SIZE - 1);
                    for col in leftmost.saturating_sub(word.len())..=col_hi {
                        match self.try_at(word, row, col, dir, bounds, candidates, hand, depth) {
                            CellStep::Nothing => {}
                            CellStep::PastEdge => break,
                            CellStep::Solved(b) => return SearchOutcome::Solved(b),
                            CellStep::OutOfBudget => return SearchOutcome::OutOfBudget,
                        }
                    }
                }
            }
            Direction::Vertical => {
                let col_hi = (bounds.max_col + 1).min(BOARD_SIZE - 1);
                for col in bounds.min_col.saturating_sub(1)..=col_hi {
                    let (uppermost, lowermost) =
                        row_limits(self.board, col, bounds.min_row, bounds.max_row);
                    let row_hi = (lowermost + 1).min(BOARD_SIZE - 1);
                    for row in uppermost.saturating_sub(word.len())..=row_hi {
                        match self.try_at(word, row, col, dir, bounds, candidates, hand, depth) {
                            CellStep::Nothing => {}
                            CellStep::PastEdge => break,
                            CellStep::Solved(b) => return SearchOutcome::Solved(b),
                            CellStep::OutOfBudget => return SearchOutcome::OutOfBudget,
                        }
                    }
                }
            }
        }
        SearchOutcome::Exhausted
    }

    /// Attempt one placement: play, validate, recurse, undo on failure
    #[allow(clippy::too_many_arguments)]
    fn try_at(
        &mut self,
        word: &'a Word,
        row: usize,
        col: usize,
        dir: Direction,
        bounds: Rect,
        candidates: &[&'a Word],
        hand: Hand,
        depth: usize,
    ) -> CellStep {
        let outcome = self
            .board
            .play_word(word, row, col, dir, &hand, &mut self.on_board);
        match outcome {
            PlayOutcome::OutOfBounds => CellStep::PastEdge,
            PlayOutcome::Rejected { cells } => {
                self.board.undo_play(&cells, &mut self.on_board);
                CellStep::Nothing
            }
            PlayOutcome::Finished { cells } => {
                let placement = Placement {
                    word: word.clone(),
                    row,
                    col,
                    dir,
                };
                let new_bounds = bounds.union(placement.footprint());
                if self.placement_valid(&placement, new_bounds) {
                    self.play_seq.push(placement);
                    CellStep::Solved(new_bounds)
                } else {
                    self.board.undo_play(&cells, &mut self.on_board);
                    CellStep::Nothing
                }
            }
            PlayOutcome::Remaining { cells, hand: rest } => {
                let placement = Placement {
                    word: word.clone(),
                    row,
                    col,
                    dir,
                };
                let new_bounds = bounds.union(placement.footprint());
                if !self.placement_valid(&placement, new_bounds) {
                    self.board.undo_play(&cells, &mut self.on_board);
                    return CellStep::Nothing;
                }
                self.play_seq.push(placement);
                let next = self.refilter(candidates, &hand);
                match self.play_further(new_bounds, &next, rest, depth + 1) {
                    SearchOutcome::Solved(b) => CellStep::Solved(b),
                    SearchOutcome::Exhausted => {
                        self.play_seq.pop();
                        self.board.undo_play(&cells, &mut self.on_board);
                        CellStep::Nothing
                    }
                    SearchOutcome::OutOfBudget => {
                        self.play_seq.pop();
                        self.board.undo_play(&cells, &mut self.on_board);
                        CellStep::OutOfBudget
                    }
                }
            }
        }
    }

    /// Run the validator matching the placement's direction
    fn placement_valid(&self, placement: &Placement, bounds: Rect) -> bool {
        let last = placement.word.len() - 1;
        match placement.dir {
            Direction::Horizontal => board_valid_after_horizontal(
                self.board,
                bounds,
                placement.row,
                placement.col,
                placement.col + last,
                self.dict,
            ),
            Direction::Vertical => board_valid_after_vertical(
                self.board,
                bounds,
                placement.row,
                placement.row + last,
                placement.col,
                self.dict,
            ),
        }
    }

    /// Re-filter candidates for the letters reachable after a placement
    ///
    /// Uses the hand from before the placement, matching the conservative
    /// filter the candidates were built with.
    fn refilter(&self, candidates: &[&'a Word], hand: &Hand) -> Vec<&'a Word> {
        candidates
            .iter()
            .copied()
            .filter(|w| playable_with_board(hand, &self.on_board, w, self.board_letter_limit))
            .collect()
    }
}

/// Narrow a row of the halo to columns with a letter on or next to them
///
/// Returns `(leftmost, rightmost)`; a word anywhere outside that span could
/// not touch the occupied region on this row.
fn col_limits(board: &Board, row: usize, min_col: usize, max_col: usize) -> (usize, usize) {
    let row_lo = row.saturating_sub(1);
    let row_hi = (row + 1).min(BOARD_SIZE - 1);
    let near = |col: usize| (row_lo..=row_hi).any(|r| board.is_occupied(r, col));

    let mut leftmost = max_col;
    for col in min_col..=max_col {
        if near(col) {
            leftmost = col;
            break;
        }
    }
    let mut rightmost = min_col;
    for col in (min_col..=max_col).rev() {
        if near(col) {
            rightmost = col;
            break;
        }
    }
    (leftmost, rightmost)
}

/// Narrow a column of the halo to rows with a letter on or next to them
fn row_limits(board: &Board, col: usize, min_row: usize, max_row: usize) -> (usize, usize) {
    let col_lo = col.saturating_sub(1);
    let col_hi = (col + 1).min(BOARD_SIZE - 1);
    let near = |row: usize| (col_lo..=col_hi).any(|c| board.is_occupied(row, c));

    let mut uppermost = max_row;
    for row in min_row..=max_row {
        if near(row) {
            uppermost = row;
            break;
        }
    }
    let mut lowermost = min_row;
    for row in (min_row..=max_row).rev() {
        if near(row) {
            lowermost = row;
            break;
        }
    }
    (uppermost, lowermost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn col_limits_narrow_to_occupied_span() {
        let mut board = Board::new();
        // CAT at row 72, cols 70..=72
        board.set(72, 70, 2);
        board.set(72, 71, 0);
        board.set(72, 72, 19);

        // The played row itself
        assert_eq!(col_limits(&board, 72, 70, 72), (70, 72));
        // The row above sees the word through adjacency
        assert_eq!(col_limits(&board, 71, 70, 72), (70, 72));
        // Two rows above sees nothing: defaults collapse the scan
        assert_eq!(col_limits(&board, 70, 70, 72), (72, 70));
    }

    #[test]
    fn row_limits_narrow_to_occupied_span() {
        let mut board = Board::new();
        // RAT at col 71, rows 71..=73
        board.set(71, 71, 17);
        board.set(72, 71, 0);
        board.set(73, 71, 19);

        assert_eq!(row_limits(&board, 71, 71, 73), (71, 73));
        assert_eq!(row_limits(&board, 70, 71, 73), (71, 73));
        assert_eq!(row_limits(&board, 69, 71, 73), (73, 71));
    }
}
