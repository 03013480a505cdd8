//! Terminal output formatting
//!
//! Display-grid conversion and pretty-printing for CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_bench_report, print_failure, print_sequence, print_solution};
pub use formatters::{board_grid, solution_grid};
