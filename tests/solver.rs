//! End-to-end solver tests
//!
//! Exercise the public API the way a host would and check the universal
//! board invariants on every success: tiles match the hand exactly, every
//! run is a word, the tiles form one connected group, and the recorded play
//! sequence reproduces the returned board.

use bananagrams_solver::core::{Board, Hand, PlaySequence, Word, BOARD_SIZE, EMPTY};
use bananagrams_solver::dictionary::Dictionary;
use bananagrams_solver::solver::{
    play_from_existing, play_one_letter, solve, Solution, SolveError, SolveOptions, Solver,
};

fn dictionary(words: &[&str]) -> Dictionary {
    Dictionary::from_words(words.iter().map(|w| Word::new(w).unwrap()).collect())
}

fn hand(text: &str) -> Hand {
    Hand::from_letters(text).unwrap()
}

/// The multiset of letters on the board
fn board_letters(board: &Board) -> Hand {
    let mut counts = Hand::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let val = board.get(row, col);
            if val != EMPTY {
                counts.add(val);
            }
        }
    }
    counts
}

/// Check every universal invariant of a successful solve
fn assert_solution_valid(solution: &Solution, dict: &Dictionary, expected: &Hand) {
    let board = solution.board();
    let bounds = solution.bounds();

    // 1. Every tile lies inside the bounding rectangle, and the rectangle is tight
    assert_eq!(board.bounding_box(), Some(bounds), "bounding box not tight");

    // 2. The board's letters are exactly the hand
    assert_eq!(&board_letters(board), expected, "board letters differ from hand");
    assert_eq!(solution.hand(), expected, "echoed hand differs");

    // 3. Every maximal run of length >= 2 is a dictionary word
    for row in bounds.min_row..=bounds.max_row {
        let mut run = Vec::new();
        for col in bounds.min_col..=bounds.max_col + 1 {
            let val = if col <= bounds.max_col { board.get(row, col) } else { EMPTY };
            if val != EMPTY {
                run.push(val);
            } else {
                assert!(
                    run.len() <= 1 || dict.contains(&run),
                    "invalid horizontal run in row {row}"
                );
                run.clear();
            }
        }
    }
    for col in bounds.min_col..=bounds.max_col {
        let mut run = Vec::new();
        for row in bounds.min_row..=bounds.max_row + 1 {
            let val = if row <= bounds.max_row { board.get(row, col) } else { EMPTY };
            if val != EMPTY {
                run.push(val);
            } else {
                assert!(
                    run.len() <= 1 || dict.contains(&run),
                    "invalid vertical run in col {col}"
                );
                run.clear();
            }
        }
    }

    // 4. The tiles form a single 4-connected component
    let total = expected.total();
    let mut start = None;
    'outer: for row in bounds.min_row..=bounds.max_row {
        for col in bounds.min_col..=bounds.max_col {
            if board.is_occupied(row, col) {
                start = Some((row, col));
                break 'outer;
            }
        }
    }
    let start = start.expect("solution has no tiles");
    let mut seen = std::collections::HashSet::new();
    let mut frontier = vec![start];
    seen.insert(start);
    while let Some((row, col)) = frontier.pop() {
        let mut neighbors = Vec::new();
        if row > 0 {
            neighbors.push((row - 1, col));
        }
        if row < BOARD_SIZE - 1 {
            neighbors.push((row + 1, col));
        }
        if col > 0 {
            neighbors.push((row, col - 1));
        }
        if col < BOARD_SIZE - 1 {
            neighbors.push((row, col + 1));
        }
        for next in neighbors {
            if board.is_occupied(next.0, next.1) && seen.insert(next) {
                frontier.push(next);
            }
        }
    }
    assert_eq!(seen.len(), total, "tiles are not a single connected group");

    // 5. Replaying the sequence reproduces the board
    let (replayed, replayed_bounds) = solution.sequence().to_board().expect("empty sequence");
    assert_eq!(&replayed, board, "sequence does not reproduce the board");
    assert_eq!(replayed_bounds, bounds, "sequence bounds differ");

    // Anchor: every placement after the seed touches the tiles before it
    for index in 1..solution.sequence().len() {
        let mut prefix = PlaySequence::new();
        for placement in solution.sequence().iter().take(index) {
            prefix.push(placement.clone());
        }
        let (partial, _) = prefix.to_board().expect("non-empty prefix");
        let placement = solution.sequence().get(index).expect("index in range");
        let touches = placement.cells().any(|(row, col)| {
            partial.is_occupied(row, col)
                || (row > 0 && partial.is_occupied(row - 1, col))
                || (row < BOARD_SIZE - 1 && partial.is_occupied(row + 1, col))
                || (col > 0 && partial.is_occupied(row, col - 1))
                || (col < BOARD_SIZE - 1 && partial.is_occupied(row, col + 1))
        });
        assert!(touches, "placement {index} does not border prior tiles");
    }
}

#[test]
fn three_tile_hand_solves_to_single_centered_word() {
    let dict = dictionary(&["BAN", "CAT", "RAT", "AT"]);
    let solution = solve(&dict, &hand("BAN"), None, SolveOptions::default()).unwrap();
    assert_solution_valid(&solution, &dict, &hand("BAN"));

    // Seeded horizontally at the center row, centered on the word
    let bounds = solution.bounds();
    assert_eq!(bounds.min_row, 72);
    assert_eq!(bounds.max_row, 72);
    assert_eq!(bounds.min_col, 71);
    assert_eq!(bounds.max_col, 73);
    assert_eq!(solution.board().get(72, 71), 1); // B
}

#[test]
fn crossing_hand_uses_every_tile() {
    let dict = dictionary(&["CAT", "RAT", "CAR", "AT", "TAR", "ART"]);
    let solution = solve(&dict, &hand("CAATR"), None, SolveOptions::default()).unwrap();
    assert_solution_valid(&solution, &dict, &hand("CAATR"));
    assert!(solution.sequence().len() >= 2);
}

#[test]
fn single_tile_hand_rejected_before_search() {
    let dict = dictionary(&["CAT"]);
    let err = solve(&dict, &hand("C"), None, SolveOptions::default()).unwrap_err();
    assert!(matches!(err, SolveError::InvalidInput(_)));
}

#[test]
fn unmakeable_hand_dumps() {
    let dict = dictionary(&["CAT", "RAT", "AT"]);
    let err = solve(&dict, &hand("ZZZZZ"), None, SolveOptions::default()).unwrap_err();
    assert_eq!(err, SolveError::NoWordsPlayable);
    assert_eq!(
        err.to_string(),
        "No valid words can be formed from the current letters - dump and try again!"
    );
}

#[test]
fn adding_one_tile_extends_the_prior_board() {
    let dict = dictionary(&["CAT", "RAT", "CATS", "RATS", "AT", "AS", "TAR", "ART"]);
    let mut solver = Solver::new(&dict);
    let first = solver.solve(&hand("CAATR")).unwrap();
    assert_solution_valid(&first, &dict, &hand("CAATR"));

    let second = solver.solve(&hand("CAATRS")).unwrap();
    assert_solution_valid(&second, &dict, &hand("CAATRS"));

    // The bounding rectangle widens by at most one cell in one dimension
    let first_bounds = first.bounds();
    let second_bounds = second.bounds();
    let col_growth = (second_bounds.max_col - second_bounds.min_col)
        .saturating_sub(first_bounds.max_col - first_bounds.min_col);
    let row_growth = (second_bounds.max_row - second_bounds.min_row)
        .saturating_sub(first_bounds.max_row - first_bounds.min_row);
    assert!(col_growth + row_growth <= 1);
}

#[test]
fn removing_a_tile_forces_a_fresh_solve() {
    let dict = dictionary(&["CAT", "RAT", "CAR", "AT", "TAR", "ART", "ACT"]);
    let mut solver = Solver::new(&dict);
    solver.solve(&hand("CAATR")).unwrap();

    let smaller = solver.solve(&hand("CAAT")).unwrap();
    assert_solution_valid(&smaller, &dict, &hand("CAAT"));
}

#[test]
fn same_hand_returns_the_prior_board_unchanged() {
    let dict = dictionary(&["CAT", "RAT", "AT"]);
    let mut solver = Solver::new(&dict);
    let first = solver.solve(&hand("CAATR")).unwrap();
    let second = solver.solve(&hand("CAATR")).unwrap();
    assert_eq!(first.board(), second.board());
    assert_eq!(first.sequence(), second.sequence());
    assert_eq!(first.bounds(), second.bounds());
}

#[test]
fn one_letter_shortcut_appends_to_the_sequence() {
    let dict = dictionary(&["CAT", "RAT", "CATS", "RATS", "AT", "AS"]);
    let prior = solve(&dict, &hand("CAATR"), None, SolveOptions::default()).unwrap();
    let extended = play_one_letter(&dict, &prior, 18).unwrap(); // S
    assert_solution_valid(&extended, &dict, &hand("CAATRS"));
    assert_eq!(extended.sequence().len(), prior.sequence().len() + 1);
}

#[test]
fn replay_keeps_the_prior_layout() {
    let dict = dictionary(&["CAT", "RAT", "CATS", "RATS", "TAR", "ART", "AT", "AS", "STAR"]);
    let prior = solve(&dict, &hand("CAATR"), None, SolveOptions::default()).unwrap();
    let replayed =
        play_from_existing(&dict, &hand("CAATRS"), &prior, SolveOptions::default()).unwrap();
    assert_solution_valid(&replayed, &dict, &hand("CAATRS"));

    // Every prior placement survives as a prefix of the new sequence
    for (index, placement) in prior.sequence().iter().enumerate() {
        assert_eq!(replayed.sequence().get(index), Some(placement));
    }
}

#[test]
fn replay_mismatch_returns_none() {
    let dict = dictionary(&["CAT", "RAT", "AT"]);
    let prior = solve(&dict, &hand("CAATR"), None, SolveOptions::default()).unwrap();
    assert!(play_from_existing(&dict, &hand("BEE"), &prior, SolveOptions::default()).is_none());
}

#[test]
fn exhausted_budget_reports_as_dump() {
    let dict = dictionary(&["CAT", "RAT", "CAR", "AT"]);
    let options = SolveOptions {
        max_words_to_check: 0,
        ..SolveOptions::default()
    };
    let err = solve(&dict, &hand("CAATR"), None, options).unwrap_err();
    assert_eq!(err, SolveError::NoSolutionFound);
    assert!(err.is_dump());
}

#[test]
fn bundled_dictionary_solves_its_own_words() {
    let dict = Dictionary::bundled();
    // BANANA is in the bundled list, so the seed alone finishes the hand
    let solution = solve(&dict, &hand("BANANA"), None, SolveOptions::default()).unwrap();
    assert_solution_valid(&solution, &dict, &hand("BANANA"));
    assert_eq!(solution.sequence().len(), 1);
}

#[test]
fn bundled_dictionary_solves_a_crossing_hand() {
    let dict = Dictionary::bundled();
    let solution = solve(&dict, &hand("CAATR"), None, SolveOptions::default()).unwrap();
    assert_solution_valid(&solution, &dict, &hand("CAATR"));
}
