//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::scoring::{GuessMetrics, calculate_entropy, calculate_metrics};
use crate::core::Word;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

/// Entropy differences below this are treated as ties
const ENTROPY_EPSILON: f64 = 1e-9;

/// A strategy for picking the next guess
pub trait Strategy {
    /// Select a guess from `untried` (candidates not yet guessed)
    ///
    /// `candidates` is the full current candidate set, used to score guesses.
    /// Returns `None` only if `untried` is empty.
    fn select_guess<'a>(
        &mut self,
        untried: &[&'a Word],
        candidates: &[&'a Word],
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Adaptive strategy (default)
    Adaptive(AdaptiveStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Uniform random choice among untried candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &mut self,
        untried: &[&'a Word],
        candidates: &[&'a Word],
    ) -> Option<&'a Word> {
        match self {
            Self::Adaptive(s) => s.select_guess(untried, candidates),
            Self::Entropy(s) => s.select_guess(untried, candidates),
            Self::Minimax(s) => s.select_guess(untried, candidates),
            Self::Random(s) => s.select_guess(untried, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "adaptive", "entropy", "minimax", "random".
    /// Defaults to adaptive if name is unrecognized. `rng` is only consumed
    /// by strategies that make random choices.
    #[must_use]
    pub fn from_name(name: &str, rng: StdRng) -> Self {
        match name {
            "entropy" => Self::Entropy(EntropyStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            "random" => Self::Random(RandomStrategy::new(rng)),
            _ => Self::Adaptive(AdaptiveStrategy::new(rng)),
        }
    }

    /// Short name of the wrapped strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adaptive(_) => "adaptive",
            Self::Entropy(_) => "entropy",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

/// Uniform random choice among untried candidates
///
/// The random source is injected so games can be replayed from a seed.
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Deterministic strategy for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn select_guess<'a>(
        &mut self,
        untried: &[&'a Word],
        _candidates: &[&'a Word],
    ) -> Option<&'a Word> {
        untried.choose(&mut self.rng).copied()
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the untried candidate whose feedback splits the candidate
/// set with the highest Shannon entropy. The first of equal scores wins.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(
        &mut self,
        untried: &[&'a Word],
        candidates: &[&'a Word],
    ) -> Option<&'a Word> {
        let scores: Vec<f64> = untried
            .par_iter()
            .map(|&guess| calculate_entropy(guess, candidates))
            .collect();

        first_best(untried, &scores, |a, b| a > b + ENTROPY_EPSILON)
    }
}

/// Pure minimax strategy
///
/// Always selects the untried candidate that minimizes the worst-case number
/// of remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &mut self,
        untried: &[&'a Word],
        candidates: &[&'a Word],
    ) -> Option<&'a Word> {
        let scores: Vec<usize> = untried
            .par_iter()
            .map(|&guess| calculate_metrics(guess, candidates).max_partition)
            .collect();

        first_best(untried, &scores, |a, b| a < b)
    }
}

/// Adaptive strategy
///
/// Adjusts tactics based on how many candidates remain:
/// - more than `max_scored` untried candidates: random (scoring is quadratic)
/// - at most `random_threshold` candidates: random (nothing left to learn)
/// - otherwise: entropy, ties broken by smaller worst case, then by smaller
///   expected remaining
pub struct AdaptiveStrategy<R = StdRng> {
    /// Untried candidates above this are not scored (default: 400)
    pub max_scored: usize,
    /// Candidates at or below this are picked at random (default: 2)
    pub random_threshold: usize,
    random: RandomStrategy<R>,
}

/// Which tactic the adaptive strategy picked for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveTier {
    Sampled,
    Scored,
    Endgame,
}

impl<R: Rng> AdaptiveStrategy<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self::with_thresholds(rng, 400, 2)
    }

    #[must_use]
    pub const fn with_thresholds(rng: R, max_scored: usize, random_threshold: usize) -> Self {
        Self {
            max_scored,
            random_threshold,
            random: RandomStrategy::new(rng),
        }
    }

    /// Get the tier for the current round
    #[must_use]
    pub const fn get_tier(&self, num_untried: usize, num_candidates: usize) -> AdaptiveTier {
        if num_candidates <= self.random_threshold {
            AdaptiveTier::Endgame
        } else if num_untried > self.max_scored {
            AdaptiveTier::Sampled
        } else {
            AdaptiveTier::Scored
        }
    }
}

impl<R: Rng> Strategy for AdaptiveStrategy<R> {
    fn select_guess<'a>(
        &mut self,
        untried: &[&'a Word],
        candidates: &[&'a Word],
    ) -> Option<&'a Word> {
        let tier = self.get_tier(untried.len(), candidates.len());
        debug!(?tier, untried = untried.len(), candidates = candidates.len(), "adaptive tier");

        match tier {
            AdaptiveTier::Sampled | AdaptiveTier::Endgame => {
                self.random.select_guess(untried, candidates)
            }
            AdaptiveTier::Scored => {
                let metrics: Vec<GuessMetrics> = untried
                    .par_iter()
                    .map(|&guess| calculate_metrics(guess, candidates))
                    .collect();

                first_best(untried, &metrics, |a, b| outranks(&a, &b))
            }
        }
    }
}

/// Entropy first, then smaller worst case, then smaller expected remaining
fn outranks(a: &GuessMetrics, b: &GuessMetrics) -> bool {
    if (a.entropy - b.entropy).abs() > ENTROPY_EPSILON {
        return a.entropy > b.entropy;
    }
    if a.max_partition != b.max_partition {
        return a.max_partition < b.max_partition;
    }
    a.expected_remaining < b.expected_remaining - ENTROPY_EPSILON
}

/// The first word whose score no later score beats
fn first_best<'a, T: Copy>(
    words: &[&'a Word],
    scores: &[T],
    better: impl Fn(T, T) -> bool,
) -> Option<&'a Word> {
    let mut best: Option<(&'a Word, T)> = None;

    for (&word, &score) in words.iter().zip(scores) {
        match best {
            Some((_, current)) if !better(score, current) => {}
            _ => best = Some((word, score)),
        }
    }

    best.map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn random_strategy_is_reproducible_from_seed() {
        let pool = words(&["cat", "cot", "cut", "dog", "dig", "hen", "pen", "ten"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let mut first = RandomStrategy::seeded(7);
        let mut second = RandomStrategy::seeded(7);
        for _ in 0..10 {
            assert_eq!(
                first.select_guess(&refs, &refs),
                second.select_guess(&refs, &refs)
            );
        }
    }

    #[test]
    fn random_strategy_empty_pool() {
        let mut strategy = RandomStrategy::seeded(1);
        assert!(strategy.select_guess(&[], &[]).is_none());
    }

    #[test]
    fn entropy_prefers_splitting_guess() {
        // "cat" separates cat / cot / act / cats; "dog" sees them all as far away
        let pool = words(&["dog", "cat"]);
        let candidates = words(&["cat", "cot", "act", "cats"]);
        let untried: Vec<&Word> = pool.iter().collect();
        let refs: Vec<&Word> = candidates.iter().collect();

        let best = EntropyStrategy.select_guess(&untried, &refs).unwrap();
        assert_eq!(best.text(), "cat");
    }

    #[test]
    fn minimax_prefers_smaller_worst_case() {
        let pool = words(&["dog", "cat"]);
        let candidates = words(&["cat", "cot", "act", "cats"]);
        let untried: Vec<&Word> = pool.iter().collect();
        let refs: Vec<&Word> = candidates.iter().collect();

        let best = MinimaxStrategy.select_guess(&untried, &refs).unwrap();
        assert_eq!(best.text(), "cat");
    }

    #[test]
    fn ties_resolved_by_first_occurrence() {
        let pool = words(&["aaa", "bbb"]);
        let candidates = words(&["xyz"]);
        let untried: Vec<&Word> = pool.iter().collect();
        let refs: Vec<&Word> = candidates.iter().collect();

        let best = EntropyStrategy.select_guess(&untried, &refs).unwrap();
        assert_eq!(best.text(), "aaa");
    }

    #[test]
    fn adaptive_tiers() {
        let strategy = AdaptiveStrategy::new(StdRng::seed_from_u64(0));
        assert_eq!(strategy.get_tier(2, 2), AdaptiveTier::Endgame);
        assert_eq!(strategy.get_tier(401, 401), AdaptiveTier::Sampled);
        assert_eq!(strategy.get_tier(50, 50), AdaptiveTier::Scored);
    }

    #[test]
    fn adaptive_scores_mid_game() {
        let candidates = words(&["cat", "cot", "act", "cats", "dog"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let mut strategy = AdaptiveStrategy::new(StdRng::seed_from_u64(0));
        let best = strategy.select_guess(&refs, &refs).unwrap();
        // Expected: "cat" gives five distinct outcomes
        assert_eq!(best.text(), "cat");
    }

    #[test]
    fn from_name_maps_known_names() {
        let rng = || StdRng::seed_from_u64(0);
        assert_eq!(StrategyType::from_name("entropy", rng()).name(), "entropy");
        assert_eq!(StrategyType::from_name("minimax", rng()).name(), "minimax");
        assert_eq!(StrategyType::from_name("random", rng()).name(), "random");
        assert_eq!(StrategyType::from_name("unknown", rng()).name(), "adaptive");
    }
}
