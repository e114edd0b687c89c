//! Information scoring for candidate guesses
//!
//! A guess splits the candidate set into partitions, one per distinct
//! feedback it could receive. Good guesses produce many small partitions.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy of the feedback distribution (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of candidates left after this guess
    pub expected_remaining: f64,
    /// Largest partition (worst-case candidates left)
    pub max_partition: usize,
}

impl GuessMetrics {
    const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
    };
}

/// Group candidates by the feedback `guess` would receive if each were the target
#[must_use]
pub fn group_by_feedback(guess: &Word, candidates: &[&Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a partition: H = -Σ p * log₂(p)
///
/// # Properties
/// - 0.0 when everything falls in one partition
/// - log₂(n) for n equal partitions
///
/// # Examples
/// ```
/// use distle::guesser::shannon_entropy;
///
/// assert!((shannon_entropy(&[25, 25, 25, 25]) - 2.0).abs() < 1e-9);
/// assert!(shannon_entropy(&[10]).abs() < 1e-9);
/// ```
#[must_use]
pub fn shannon_entropy(partition_sizes: &[usize]) -> f64 {
    let total = partition_sizes.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    partition_sizes
        .iter()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain of `guess` against the candidates, in bits
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let sizes: Vec<usize> = group_by_feedback(guess, candidates).into_values().collect();
    shannon_entropy(&sizes)
}

/// Entropy, expected remaining candidates and worst-case partition for `guess`
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics::EMPTY;
    }

    let sizes: Vec<usize> = group_by_feedback(guess, candidates).into_values().collect();
    let total = candidates.len() as f64;

    let expected_remaining = sizes
        .iter()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&sizes),
        expected_remaining,
        max_partition: sizes.iter().copied().max().unwrap_or(0),
    }
}
