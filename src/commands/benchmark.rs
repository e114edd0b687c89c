//! Benchmark command
//!
//! Plays one game per target word and collects guesser statistics.

use super::solve::{GameConfig, play_game};
use crate::core::Word;
use crate::guesser::{Guesser, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Settings shared by every game of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub strategy: String,
    /// Game `i` seeds its strategy with `seed + i`
    pub seed: u64,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            strategy: "adaptive".to_string(),
            seed: 0,
            max_guesses: 6,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub total_words: usize,
    pub solved: usize,
    /// Games that ended with a guesser error (target outside the dictionary)
    pub errors: usize,
    /// Guesses over solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of games solved in that many guesses
    pub distribution: FxHashMap<usize, usize>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }
}

/// Run a fresh guesser against each of `targets`
///
/// Every game gets its own guesser and its own seeded RNG, so a run is
/// reproducible from `config.seed`.
#[must_use]
pub fn run_benchmark(
    targets: &[Word],
    dictionary: &[Word],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let progress = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut errors = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failed_words = Vec::new();

    for (index, target) in targets.iter().enumerate() {
        let rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
        let mut guesser = Guesser::new(StrategyType::from_name(&config.strategy, rng));

        let game = GameConfig {
            target: target.text().to_string(),
            max_guesses: config.max_guesses,
        };

        match play_game(&mut guesser, dictionary, game) {
            Ok(result) if result.success => {
                let guesses = result.guess_count();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Ok(result) => failed_words.push(result.target),
            Err(err) => {
                warn!(word = %target, %err, "game aborted");
                errors += 1;
                failed_words.push(target.text().to_string());
            }
        }

        if solved > 0 {
            progress.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        strategy: config.strategy.clone(),
        total_words,
        solved,
        errors,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failed_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
