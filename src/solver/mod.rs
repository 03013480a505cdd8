//! The solving engine
//!
//! Candidate filtering, board validation, the recursive placement search,
//! and the entry strategies that decide how much of a previous solution to
//! reuse.

mod engine;
pub mod filter;
mod search;
pub mod validate;

pub use engine::{
    play_from_existing, play_from_scratch, play_one_letter, solve, Solution, SolveError,
    SolveOptions, Solver,
};
