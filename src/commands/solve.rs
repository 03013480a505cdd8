//! One-shot solve command
//!
//! Parses a hand string, runs a fresh solve, and packages the result for
//! display.

use crate::core::Hand;
use crate::dictionary::Dictionary;
use crate::output::solution_grid;
use crate::solver::{solve, Solution, SolveOptions};

/// Result of a one-shot solve, ready for printing
#[derive(Debug)]
pub struct SolveReport {
    pub solution: Solution,
    pub grid: Vec<Vec<String>>,
}

/// Solve a hand given as a tile string, e.g. `"CAATR"`
///
/// # Errors
/// Returns the human-readable message for a malformed hand or a dump.
pub fn solve_hand(
    dictionary: &Dictionary,
    letters: &str,
    options: SolveOptions,
) -> Result<SolveReport, String> {
    let hand = Hand::from_letters(letters).map_err(|e| e.to_string())?;
    let solution = solve(dictionary, &hand, None, options).map_err(|e| e.to_string())?;
    let grid = solution_grid(&solution, None);
    Ok(SolveReport { solution, grid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|w| Word::new(w).unwrap()).collect())
    }

    #[test]
    fn solve_hand_reports_grid() {
        let dict = dictionary(&["BAN", "AT"]);
        let report = solve_hand(&dict, "ban", SolveOptions::default()).unwrap();
        assert_eq!(report.grid, vec![vec!["B", "A", "N"]]);
        assert_eq!(report.solution.hand().total(), 3);
    }

    #[test]
    fn solve_hand_rejects_bad_tiles() {
        let dict = dictionary(&["BAN"]);
        let err = solve_hand(&dict, "b4n", SolveOptions::default()).unwrap_err();
        assert!(err.contains("Invalid tile"));
    }

    #[test]
    fn solve_hand_reports_dump() {
        let dict = dictionary(&["BAN"]);
        let err = solve_hand(&dict, "ZZZZ", SolveOptions::default()).unwrap_err();
        assert!(err.contains("dump"));
    }
}
