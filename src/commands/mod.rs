//! Command implementations

pub mod bag;
pub mod bench;
pub mod simple;
pub mod solve;

pub use bag::{draw_hand, STANDARD_TILE_COUNTS, STANDARD_TILE_TOTAL};
pub use bench::{run_bench, BenchOptions, BenchReport};
pub use simple::run_session;
pub use solve::{solve_hand, SolveReport};
