//! Benchmark command
//!
//! Draws random hands from the tile bag and solves each from scratch. Hands
//! are independent, so they run in parallel; each individual solve stays
//! single-threaded.

use crate::dictionary::Dictionary;
use crate::solver::{play_from_scratch, SolveOptions};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::bag::draw_hand;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchOptions {
    /// Number of random hands to solve
    pub hands: usize,
    /// Tiles per hand
    pub tiles: usize,
    /// Draw from the doubled 288-tile bag
    pub double_bag: bool,
}

/// Result of a benchmark run
pub struct BenchReport {
    pub total: usize,
    pub solved: usize,
    pub dumped: usize,
    pub total_duration: Duration,
    pub average_solve_ms: f64,
    pub slowest_solve_ms: f64,
    /// Placements per solved board, as (words, hands-with-that-count)
    pub words_distribution: HashMap<usize, usize>,
}

/// Run the benchmark
pub fn run_bench(
    dictionary: &Dictionary,
    bench: BenchOptions,
    options: SolveOptions,
) -> BenchReport {
    let mut rng = rand::rng();
    let hands: Vec<_> = (0..bench.hands)
        .map(|_| draw_hand(&mut rng, bench.tiles, bench.double_bag))
        .collect();

    let progress = ProgressBar::new(hands.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let started = Instant::now();
    let results: Vec<(Option<usize>, Duration)> = hands
        .par_iter()
        .map(|hand| {
            let solve_started = Instant::now();
            let words = play_from_scratch(dictionary, hand, options)
                .ok()
                .map(|solution| solution.sequence().len());
            progress.inc(1);
            (words, solve_started.elapsed())
        })
        .collect();
    progress.finish_and_clear();
    let total_duration = started.elapsed();

    let mut solved = 0;
    let mut words_distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_ms = 0.0;
    let mut slowest_ms = 0.0f64;
    for (words, duration) in &results {
        let ms = duration.as_secs_f64() * 1000.0;
        total_ms += ms;
        slowest_ms = slowest_ms.max(ms);
        if let Some(words) = words {
            solved += 1;
            *words_distribution.entry(*words).or_insert(0) += 1;
        }
    }

    BenchReport {
        total: results.len(),
        solved,
        dumped: results.len() - solved,
        total_duration,
        average_solve_ms: if results.is_empty() {
            0.0
        } else {
            total_ms / results.len() as f64
        },
        slowest_solve_ms: slowest_ms,
        words_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_runs_all_hands() {
        let dict = Dictionary::bundled();
        let report = run_bench(
            &dict,
            BenchOptions {
                hands: 3,
                tiles: 6,
                double_bag: false,
            },
            SolveOptions {
                max_words_to_check: 2_000,
                ..SolveOptions::default()
            },
        );
        assert_eq!(report.total, 3);
        assert_eq!(report.solved + report.dumped, 3);
    }
}
