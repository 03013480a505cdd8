//! Display functions for command results

use crate::commands::BenchReport;
use crate::solver::Solution;
use colored::Colorize;

/// Print a solved board
///
/// Carried-over tiles (marked `X*` in the grid) render dimmed; fresh tiles
/// render bold.
pub fn print_solution(solution: &Solution, grid: &[Vec<String>]) {
    let bounds = solution.bounds();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Placed {} tiles in {} words ({:.1} ms)",
        solution.hand().total().to_string().bright_yellow().bold(),
        solution.sequence().len(),
        solution.elapsed().as_secs_f64() * 1000.0
    );
    println!(
        "Board region: rows {}..={}, cols {}..={}",
        bounds.min_row, bounds.max_row, bounds.min_col, bounds.max_col
    );
    println!("{}", "─".repeat(60).cyan());

    for row in grid {
        let mut line = String::new();
        for cell in row {
            let rendered = match cell.as_str() {
                " " => "  ".normal(),
                text if text.ends_with('*') => format!("{} ", &text[..1]).dimmed(),
                text => format!("{text} ").bold(),
            };
            line.push_str(&rendered.to_string());
        }
        println!("{line}");
    }
    println!();
}

/// Print the placements behind a solution, in play order
pub fn print_sequence(solution: &Solution) {
    println!("{}", "Play sequence:".bright_cyan().bold());
    for (i, placement) in solution.sequence().iter().enumerate() {
        println!(
            "  {:>2}. {} at ({}, {}) {}",
            i + 1,
            placement.word.to_string().bright_yellow(),
            placement.row,
            placement.col,
            placement.dir
        );
    }
}

/// Print a dump or error message
pub fn print_failure(message: &str) {
    println!("\n{}", message.red().bold());
}

/// Print the result of a benchmark run
pub fn print_bench_report(report: &BenchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Hands:".bright_cyan().bold());
    println!("   Attempted:      {}", report.total);
    println!(
        "   Solved:         {}",
        report.solved.to_string().green().bold()
    );
    println!(
        "   Dumped:         {}",
        report.dumped.to_string().yellow()
    );

    println!("\n{}", "Timing:".bright_cyan().bold());
    println!(
        "   Total:          {:.2}s",
        report.total_duration.as_secs_f64()
    );
    println!("   Average solve:  {:.1} ms", report.average_solve_ms);
    println!("   Slowest solve:  {:.1} ms", report.slowest_solve_ms);

    if !report.words_distribution.is_empty() {
        println!("\n{}", "Words per solution:".bright_cyan().bold());
        let mut counts: Vec<_> = report.words_distribution.iter().collect();
        counts.sort_by_key(|&(words, _)| *words);
        for (words, hands) in counts {
            println!("   {words:>3} words: {hands} hands");
        }
    }
}
