//! Display functions for command results

use super::formatters::{entropy_bar, format_distance_table, format_feedback};
use crate::commands::{BenchmarkResult, GameResult, PairAnalysis};
use colored::Colorize;

/// Print the result of a driven game
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        result.target.as_str().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {:<10} {}",
            i + 1,
            step.word,
            format_feedback(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 && step.candidates_after < step.candidates_before {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the analysis of a guess/target pair
pub fn print_analysis_result(result: &PairAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "PAIR ANALYSIS:".bright_cyan().bold(),
        result.guess.text().bright_yellow().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📐 {}", "Distance table:".bright_cyan().bold());
    for line in format_distance_table(result.guess.chars(), result.target.chars(), &result.table)
        .lines()
    {
        println!("   {line}");
    }

    println!("\n   Feedback:    {}", format_feedback(&result.feedback));

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.dictionary_size, 30);

    println!("\n📊 Against {} dictionary words:", result.dictionary_size);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", metrics.max_partition);

    println!(
        "\n   {} dictionary words give the same feedback",
        result.consistent.len().to_string().bright_white().bold()
    );
    if !result.consistent.is_empty() && result.consistent.len() <= 10 {
        for word in &result.consistent {
            println!("     • {word}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let mut counts: Vec<(usize, usize)> =
            result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
        counts.sort_unstable();

        for (guess_count, count) in counts {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:>2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed_words.is_empty() {
        println!(
            "\n❌ {} ({})",
            "Unsolved:".red().bold(),
            result.failed_words.len()
        );
        for word in result.failed_words.iter().take(10) {
            println!("   • {word}");
        }
        if result.errors > 0 {
            println!(
                "   {} aborted with a guesser error (see log)",
                result.errors
            );
        }
    }
}
