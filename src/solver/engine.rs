//! Solve entry points
//!
//! The strategies that wrap the recursive search: a fresh solve seeded from
//! the longest makeable words, reconstruction of a previous solution with
//! tiles left over, and the single-tile shortcut when the hand grew by one.
//! A `Solver` session remembers the last solution and picks the cheapest
//! strategy the hand difference allows.

use crate::core::{
    Board, Direction, Hand, HandDelta, Letter, Placement, PlaySequence, Rect, Word, BOARD_SIZE,
    EMPTY,
};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

use super::filter::{is_makeable, playable_after_seed};
use super::search::{Search, SearchOutcome};
use super::validate::board_valid_after_horizontal;

/// Seed words get a fresh words-checked budget up to this seed index;
/// later seeds share one counter.
const FRESH_BUDGET_SEEDS: usize = 6;

/// Tuning knobs for a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Most letters already on the board one candidate word may count
    /// against its hand; raising it widens the candidate set and slows the
    /// search
    pub filter_letters_on_board: usize,
    /// Give up after this many candidate placements (per seed word for the
    /// first few seeds, then in total)
    pub max_words_to_check: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            filter_letters_on_board: 1,
            max_words_to_check: 50_000,
        }
    }
}

/// A completed board using every tile in the hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    board: Board,
    bounds: Rect,
    hand: Hand,
    sequence: PlaySequence,
    elapsed: Duration,
}

impl Solution {
    /// The full board; cells outside the bounding rectangle are empty
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tight bounding rectangle of the played tiles
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The hand this board was built from
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The placements that produced the board, seed first
    #[must_use]
    pub fn sequence(&self) -> &PlaySequence {
        &self.sequence
    }

    /// Wall-clock time the solve took
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Error type for solves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The request itself was malformed
    InvalidInput(String),
    /// Not a single dictionary word can be formed from the hand
    NoWordsPlayable,
    /// The search exhausted its options or its budget
    NoSolutionFound,
}

impl SolveError {
    /// Whether the player's recourse is to exchange tiles
    #[must_use]
    pub const fn is_dump(&self) -> bool {
        matches!(self, Self::NoWordsPlayable | Self::NoSolutionFound)
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "{msg}"),
            Self::NoWordsPlayable => write!(
                f,
                "No valid words can be formed from the current letters - dump and try again!"
            ),
            Self::NoSolutionFound => write!(f, "No solution found - dump and try again!"),
        }
    }
}

impl std::error::Error for SolveError {}

fn validate_hand(hand: &Hand) -> Result<(), SolveError> {
    if hand.total() < 2 {
        return Err(SolveError::InvalidInput(
            "A hand must contain at least 2 letters".to_string(),
        ));
    }
    Ok(())
}

/// Build a board from scratch for `hand`
///
/// Seeds each makeable word in turn, longest first, horizontally at the grid
/// center, and searches from there. The first seed whose search completes
/// wins.
///
/// # Errors
/// - `InvalidInput` if the hand holds fewer than two tiles
/// - `NoWordsPlayable` if nothing in the dictionary can be assembled from it
/// - `NoSolutionFound` if every seed is exhausted or the budget runs out
pub fn play_from_scratch(
    dict: &Dictionary,
    hand: &Hand,
    options: SolveOptions,
) -> Result<Solution, SolveError> {
    let start = Instant::now();
    validate_hand(hand)?;

    let makeable: Vec<&Word> = dict
        .words()
        .iter()
        .filter(|word| is_makeable(word, hand))
        .collect();
    if makeable.is_empty() {
        return Err(SolveError::NoWordsPlayable);
    }

    let mut board = Board::new();
    let mut words_checked = 0usize;
    for (seed_index, seed) in makeable.iter().enumerate() {
        let row = BOARD_SIZE / 2;
        let col = BOARD_SIZE / 2 - seed.len() / 2;
        let seed_cells = board.write_word(seed, row, col, Direction::Horizontal);

        let mut on_board = Hand::new();
        let mut use_letters = *hand;
        for &letter in seed.letters() {
            on_board.add(letter);
            // Cannot fail: the seed passed is_makeable
            use_letters.take(letter);
        }
        let bounds = Rect::of_word(row, col, seed.len(), Direction::Horizontal);
        let mut sequence = PlaySequence::new();
        sequence.push(Placement {
            word: (*seed).clone(),
            row,
            col,
            dir: Direction::Horizontal,
        });

        if use_letters.is_empty() {
            return Ok(Solution {
                board,
                bounds,
                hand: *hand,
                sequence,
                elapsed: start.elapsed(),
            });
        }

        // Words before this seed already had their turn as seeds; what is
        // left must be playable from the remaining tiles plus one seed letter
        let seed_letters: FxHashSet<Letter> = seed.letters().iter().copied().collect();
        let candidates: Vec<&Word> = makeable[seed_index..]
            .iter()
            .copied()
            .filter(|word| playable_after_seed(&use_letters, word, &seed_letters))
            .collect();

        // Fresh budget for each of the first few seeds, then one shared counter
        if seed_index <= FRESH_BUDGET_SEEDS {
            words_checked = 0;
        }
        let mut search = Search {
            dict,
            board: &mut board,
            on_board,
            play_seq: sequence,
            prior_seq: None,
            words_checked,
            board_letter_limit: options.filter_letters_on_board,
            max_words_to_check: options.max_words_to_check,
        };
        let outcome = search.play_further(bounds, &candidates, use_letters, 0);
        words_checked = search.words_checked;
        let sequence = std::mem::take(&mut search.play_seq);
        drop(search);

        match outcome {
            SearchOutcome::Solved(final_bounds) => {
                return Ok(Solution {
                    board,
                    bounds: final_bounds,
                    hand: *hand,
                    sequence,
                    elapsed: start.elapsed(),
                });
            }
            SearchOutcome::Exhausted => {}
            SearchOutcome::OutOfBudget => {
                if seed_index >= FRESH_BUDGET_SEEDS {
                    break;
                }
            }
        }
        // Clear the seed before trying the next one
        for &(r, c) in &seed_cells {
            board.set(r, c, EMPTY);
        }
    }
    Err(SolveError::NoSolutionFound)
}

/// Rebuild a previous solution and place the extra tiles
///
/// Replays the prior sequence placement by placement, then searches on with
/// whatever tiles remain. Returns `None` when the reconstruction cannot
/// complete (the hand no longer covers the prior board, or a recorded
/// placement no longer fits) so the caller can fall back to a fresh solve.
#[must_use]
pub fn play_from_existing(
    dict: &Dictionary,
    hand: &Hand,
    prior: &Solution,
    options: SolveOptions,
) -> Option<Solution> {
    let start = Instant::now();
    let seed = prior.sequence.first()?.clone();

    let mut use_letters = *hand;
    for &letter in seed.word.letters() {
        if !use_letters.take(letter) {
            return None;
        }
    }

    let mut board = Board::new();
    board.write_word(&seed.word, seed.row, seed.col, seed.dir);
    let mut on_board = Hand::new();
    for &letter in seed.word.letters() {
        on_board.add(letter);
    }
    let bounds = seed.footprint();
    let mut sequence = PlaySequence::new();
    sequence.push(seed.clone());

    if use_letters.is_empty() {
        if prior.sequence.len() != 1 {
            return None;
        }
        return Some(Solution {
            board,
            bounds,
            hand: *hand,
            sequence,
            elapsed: start.elapsed(),
        });
    }

    let makeable: Vec<&Word> = dict
        .words()
        .iter()
        .filter(|word| is_makeable(word, hand))
        .collect();
    let seed_letters: FxHashSet<Letter> = seed.word.letters().iter().copied().collect();
    let candidates: Vec<&Word> = makeable
        .iter()
        .copied()
        .filter(|word| playable_after_seed(&use_letters, word, &seed_letters))
        .collect();

    let mut search = Search {
        dict,
        board: &mut board,
        on_board,
        play_seq: sequence,
        prior_seq: Some(&prior.sequence),
        words_checked: 0,
        board_letter_limit: options.filter_letters_on_board,
        max_words_to_check: options.max_words_to_check,
    };
    let outcome = search.play_further(bounds, &candidates, use_letters, 0);
    let sequence = std::mem::take(&mut search.play_seq);
    drop(search);

    match outcome {
        SearchOutcome::Solved(final_bounds) => Some(Solution {
            board,
            bounds: final_bounds,
            hand: *hand,
            sequence,
            elapsed: start.elapsed(),
        }),
        SearchOutcome::Exhausted | SearchOutcome::OutOfBudget => None,
    }
}

/// Extend a previous solution with a single new tile
///
/// Scans the one-cell halo around the prior board for an empty cell next to
/// a letter where dropping `letter` leaves every run valid. The bounding
/// rectangle widens by at most one cell in one dimension.
#[must_use]
pub fn play_one_letter(dict: &Dictionary, prior: &Solution, letter: Letter) -> Option<Solution> {
    let start = Instant::now();
    let bounds = prior.bounds;
    let mut board = prior.board.clone();

    let row_hi = (bounds.max_row + 1).min(BOARD_SIZE - 1);
    let col_hi = (bounds.max_col + 1).min(BOARD_SIZE - 1);
    for row in bounds.min_row.saturating_sub(1)..=row_hi {
        for col in bounds.min_col.saturating_sub(1)..=col_hi {
            if board.is_occupied(row, col) || !has_occupied_neighbor(&board, row, col) {
                continue;
            }
            board.set(row, col, letter);
            let new_bounds = bounds.union(Rect::cell(row, col));
            if board_valid_after_horizontal(&board, new_bounds, row, col, col, dict) {
                let mut sequence = prior.sequence.clone();
                sequence.push(Placement {
                    word: Word::single(letter),
                    row,
                    col,
                    dir: Direction::Horizontal,
                });
                return Some(Solution {
                    board,
                    bounds: new_bounds,
                    hand: prior.hand.with(letter),
                    sequence,
                    elapsed: start.elapsed(),
                });
            }
            board.set(row, col, EMPTY);
        }
    }
    None
}

fn has_occupied_neighbor(board: &Board, row: usize, col: usize) -> bool {
    (row > 0 && board.is_occupied(row - 1, col))
        || (row < BOARD_SIZE - 1 && board.is_occupied(row + 1, col))
        || (col > 0 && board.is_occupied(row, col - 1))
        || (col < BOARD_SIZE - 1 && board.is_occupied(row, col + 1))
}

/// Solve a hand, reusing a prior solution where the hand difference allows
///
/// | Hand vs prior | Strategy |
/// |---|---|
/// | identical | return the prior board unchanged |
/// | one tile added | single-tile halo scan, then replay, then from scratch |
/// | more added | replay, then from scratch |
/// | any tile removed, or no prior | from scratch |
///
/// # Errors
/// Same as [`play_from_scratch`], which every branch can fall back to.
pub fn solve(
    dict: &Dictionary,
    hand: &Hand,
    prior: Option<&Solution>,
    options: SolveOptions,
) -> Result<Solution, SolveError> {
    validate_hand(hand)?;
    let Some(prior) = prior else {
        return play_from_scratch(dict, hand, options);
    };
    match hand.compare(&prior.hand) {
        HandDelta::Same => Ok(prior.clone()),
        HandDelta::GreaterByOne(letter) => play_one_letter(dict, prior, letter)
            .or_else(|| play_from_existing(dict, hand, prior, options))
            .map_or_else(|| play_from_scratch(dict, hand, options), Ok),
        HandDelta::GreaterByMoreThanOne => play_from_existing(dict, hand, prior, options)
            .map_or_else(|| play_from_scratch(dict, hand, options), Ok),
        HandDelta::SomeLess => play_from_scratch(dict, hand, options),
    }
}

/// A solving session that carries the previous solution between hands
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    options: SolveOptions,
    previous: Option<Solution>,
}

impl<'a> Solver<'a> {
    /// Create a session with default options
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_options(dictionary, SolveOptions::default())
    }

    /// Create a session with explicit options
    #[must_use]
    pub const fn with_options(dictionary: &'a Dictionary, options: SolveOptions) -> Self {
        Self {
            dictionary,
            options,
            previous: None,
        }
    }

    /// Solve `hand`, reusing the previous solution where possible
    ///
    /// On success the solution also becomes the session's new prior.
    ///
    /// # Errors
    /// Same as [`solve`].
    pub fn solve(&mut self, hand: &Hand) -> Result<Solution, SolveError> {
        let solution = solve(self.dictionary, hand, self.previous.as_ref(), self.options)?;
        self.previous = Some(solution.clone());
        Ok(solution)
    }

    /// The last successful solution, if any
    #[must_use]
    pub fn previous(&self) -> Option<&Solution> {
        self.previous.as_ref()
    }

    /// Forget the previous solution; the next solve starts from scratch
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// The session's tuning knobs
    #[must_use]
    pub const fn options(&self) -> SolveOptions {
        self.options
    }
}
