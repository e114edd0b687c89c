//! Pair analysis command
//!
//! Shows how the alignment engine sees one guess/target pair and how much the
//! guess would tell a guesser holding the whole dictionary.

use crate::align::{DistanceTable, reconstruct};
use crate::core::{Feedback, Word, WordError};
use crate::guesser::{GuessMetrics, calculate_metrics, filter_candidates};

/// Result of analyzing a guess against a target
pub struct PairAnalysis {
    pub guess: Word,
    pub target: Word,
    pub table: DistanceTable,
    pub feedback: Feedback,
    /// Scores of the guess against the full dictionary
    pub metrics: GuessMetrics,
    /// Dictionary words that would survive this feedback
    pub consistent: Vec<String>,
    pub dictionary_size: usize,
}

/// Analyze the alignment of `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is empty.
///
/// # Examples
/// ```
/// use distle::commands::analyze::analyze_pair;
///
/// let analysis = analyze_pair("kitten", "sitting", &[]).unwrap();
/// assert_eq!(analysis.feedback.to_string(), "3 [IRR]");
/// ```
pub fn analyze_pair(
    guess: &str,
    target: &str,
    dictionary: &[Word],
) -> Result<PairAnalysis, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    let table = DistanceTable::build(guess.chars(), target.chars());
    let feedback = if guess == target {
        Feedback::SOLVED
    } else {
        Feedback::new(
            table.distance(),
            reconstruct(guess.chars(), target.chars(), &table),
        )
    };

    let refs: Vec<&Word> = dictionary.iter().collect();
    let metrics = calculate_metrics(&guess, &refs);
    let consistent = filter_candidates(&refs, &guess, &feedback)
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    Ok(PairAnalysis {
        guess,
        target,
        table,
        feedback,
        metrics,
        consistent,
        dictionary_size: dictionary.len(),
    })
}
