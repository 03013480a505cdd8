//! Bananagrams Solver
//!
//! Arranges a hand of letter tiles into a single connected crossword-style
//! grid where every run of two or more letters is a dictionary word, using a
//! backtracking placement search. When a hand changes between solves, the
//! previous board is reused where the difference allows.
//!
//! # Quick Start
//!
//! ```rust
//! use bananagrams_solver::core::Hand;
//! use bananagrams_solver::dictionary::Dictionary;
//! use bananagrams_solver::solver::Solver;
//!
//! let dictionary = Dictionary::bundled();
//! let mut solver = Solver::new(&dictionary);
//!
//! let hand = Hand::from_letters("BAN").unwrap();
//! let solution = solver.solve(&hand).unwrap();
//! assert_eq!(solution.sequence().len(), 1);
//! ```

// Core domain types
pub mod core;

// The word store
pub mod dictionary;

// The solving engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
