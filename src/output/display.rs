//! Display functions for command results

use super::formatters::{create_progress_bar, render_guess};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::config::MAX_ATTEMPTS;
use crate::solver::Outcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let record = &result.record;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        record.secret.text().to_uppercase().bright_yellow().bold(),
        result.strategy.label().bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            render_guess(&step.guess, step.feedback),
            step.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match record.outcome {
        Outcome::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", record.attempts())
                .green()
                .bold()
        ),
        Outcome::OutOfAttempts => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", record.attempts())
                .red()
                .bold()
        ),
        Outcome::NoCandidates => println!("{}", "❌ Ran out of candidates".red().bold()),
    }
    println!("   Nodes expanded: {}", record.nodes_expanded);
}

/// Print benchmark results, one block per strategy
pub fn print_benchmark_results(results: &[BenchmarkResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        println!(
            "\n📊 {} ({} games)",
            result.strategy.label().bright_cyan().bold(),
            result.games
        );
        println!(
            "   Win rate:         {} {}",
            create_progress_bar(result.win_rate, 100.0, 20).green(),
            format!("{:.1}%", result.win_rate).bright_yellow().bold()
        );
        println!(
            "   Time (µs):        avg {:.1}, max {:.1}",
            result.avg_time_us, result.max_time_us
        );
        println!(
            "   Nodes expanded:   avg {:.2}, max {}",
            result.avg_nodes, result.max_nodes
        );
        println!(
            "   Guesses:          avg {:.2}, max {}",
            result.avg_guesses, result.max_guesses
        );
        println!(
            "   Total time:       {:.2}s",
            result.total_time.as_secs_f64()
        );

        for guess_count in 1..=MAX_ATTEMPTS {
            if let Some(&count) = result.distribution.get(&guess_count) {
                let pct = (count as f64 / result.games as f64) * 100.0;
                let bar = create_progress_bar(pct, 100.0, 40);
                println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
            }
        }
    }

    if let Some(best) = results
        .iter()
        .filter(|r| r.wins > 0)
        .min_by(|a, b| a.avg_guesses.total_cmp(&b.avg_guesses))
    {
        println!(
            "\n🏆 Fewest guesses on average: {}",
            best.strategy.label().green().bold()
        );
    }
}
