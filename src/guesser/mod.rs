//! Distle guessing
//!
//! Candidate filtering, information scoring, guess selection strategies and
//! the stateful guesser that ties them together.

mod engine;
pub mod filter;
pub mod scoring;
pub mod strategy;

pub use engine::Guesser;
pub use filter::{filter_candidates, is_consistent};
pub use scoring::{
    GuessMetrics, calculate_entropy, calculate_metrics, group_by_feedback, shannon_entropy,
};
pub use strategy::{
    AdaptiveStrategy, AdaptiveTier, EntropyStrategy, MinimaxStrategy, RandomStrategy, Strategy,
    StrategyType,
};
