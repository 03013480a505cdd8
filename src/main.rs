//! Bananagrams Solver - CLI
//!
//! Arranges a hand of letter tiles into a connected, fully valid crossword
//! grid, reusing the previous board between solves where possible.

use anyhow::Result;
use bananagrams_solver::{
    commands::{run_bench, run_session, solve_hand, BenchOptions},
    dictionary::{load_from_file, Dictionary},
    output::{print_bench_report, print_failure, print_sequence, print_solution},
    solver::SolveOptions,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bananagrams_solver",
    about = "Arrange a hand of letter tiles into a connected crossword grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'bundled' or a path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,

    /// Most letters already on the board a candidate word may reuse
    #[arg(short = 'f', long, global = true, default_value_t = 1)]
    filter_letters: usize,

    /// Candidate placements to try before giving up on a seed word
    #[arg(short = 'm', long, global = true, default_value_t = 50_000)]
    max_words: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default): the board follows your hand as it changes
    Session,

    /// Solve a single hand from scratch
    Solve {
        /// The tiles in the hand, e.g. CAATR
        letters: String,

        /// Also print the sequence of placements
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver on random hands drawn from the tile bag
    Bench {
        /// Number of random hands to solve
        #[arg(short = 'n', long, default_value_t = 20)]
        hands: usize,

        /// Tiles per hand (a standard game deals 21)
        #[arg(short, long, default_value_t = 21)]
        tiles: usize,

        /// Draw from the doubled 288-tile bag
        #[arg(short, long)]
        double: bool,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "bundled" => Ok(Dictionary::bundled()),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let options = SolveOptions {
        filter_letters_on_board: cli.filter_letters,
        max_words_to_check: cli.max_words,
    };

    // Default to the interactive session if no command given
    let command = cli.command.unwrap_or(Commands::Session);

    match command {
        Commands::Session => {
            run_session(&dictionary, options).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { letters, verbose } => {
            run_solve_command(&dictionary, &letters, verbose, options);
            Ok(())
        }
        Commands::Bench {
            hands,
            tiles,
            double,
        } => {
            run_bench_command(&dictionary, hands, tiles, double, options);
            Ok(())
        }
    }
}

fn run_solve_command(dictionary: &Dictionary, letters: &str, verbose: bool, options: SolveOptions) {
    match solve_hand(dictionary, letters, options) {
        Ok(report) => {
            print_solution(&report.solution, &report.grid);
            if verbose {
                print_sequence(&report.solution);
            }
        }
        Err(message) => print_failure(&message),
    }
}

fn run_bench_command(
    dictionary: &Dictionary,
    hands: usize,
    tiles: usize,
    double: bool,
    options: SolveOptions,
) {
    println!(
        "Solving {hands} random hands of {tiles} tiles from the {} bag...",
        if double { "double" } else { "standard" }
    );
    let report = run_bench(
        dictionary,
        BenchOptions {
            hands,
            tiles,
            double_bag: double,
        },
        options,
    );
    print_bench_report(&report);
}
