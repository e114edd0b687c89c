//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{PairAnalysis, analyze_pair};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{GameConfig, GameResult, GuessStep, play_game};
