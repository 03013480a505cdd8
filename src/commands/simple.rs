//! Interactive session mode
//!
//! A line-based loop that keeps a solving session alive: enter a hand to
//! solve it, add tiles to the previous hand with `+`, and the solver reuses
//! the previous board whenever the hand difference allows. Tiles carried
//! over from the previous board are star-marked.

use crate::core::Hand;
use crate::dictionary::Dictionary;
use crate::output::{print_failure, print_solution, solution_grid};
use crate::solver::{SolveOptions, Solver};
use std::io::{self, Write};

/// Run the interactive session loop
///
/// # Errors
/// Returns an error on I/O failure reading from stdin.
pub fn run_session(dictionary: &Dictionary, options: SolveOptions) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Bananagrams Solver - Session Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter your tiles (e.g. CAATR) to arrange them into a grid.");
    println!("When your hand changes, the previous board is reused if it can be;");
    println!("tiles kept from the previous board are marked with a *.\n");
    println!("Commands: '+LETTERS' to add tiles, 'new' to forget the board, 'quit' to exit\n");

    let mut solver = Solver::with_options(dictionary, options);
    let mut current_hand: Option<Hand> = None;

    loop {
        let input = get_user_input("Tiles")?;
        let input = input.trim();

        match input {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "new" => {
                solver.reset();
                current_hand = None;
                println!("\nBoard forgotten; the next hand starts fresh.\n");
                continue;
            }
            _ => {}
        }

        let hand = if let Some(added) = input.strip_prefix('+') {
            let Some(base) = current_hand else {
                println!("No hand to add to yet; enter a full hand first.\n");
                continue;
            };
            match Hand::from_letters(added) {
                Ok(extra) => {
                    let mut hand = base;
                    for (letter, &count) in extra.counts().iter().enumerate() {
                        for _ in 0..count {
                            hand.add(letter as u8);
                        }
                    }
                    hand
                }
                Err(e) => {
                    print_failure(&e.to_string());
                    continue;
                }
            }
        } else {
            match Hand::from_letters(input) {
                Ok(hand) => hand,
                Err(e) => {
                    print_failure(&e.to_string());
                    continue;
                }
            }
        };

        // Capture the prior sequence before solving so kept tiles can be starred
        let prior_sequence = solver.previous().map(|s| s.sequence().clone());
        match solver.solve(&hand) {
            Ok(solution) => {
                let grid = solution_grid(&solution, prior_sequence.as_ref());
                print_solution(&solution, &grid);
                current_hand = Some(hand);
            }
            Err(e) => {
                print_failure(&e.to_string());
            }
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    Ok(input.trim().to_lowercase())
}
