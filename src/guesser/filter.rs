//! Feedback-consistency filter
//!
//! A word survives a round only if playing the same guess against it would
//! have produced exactly the reported feedback.

use crate::align::{DistanceTable, reconstruct};
use crate::core::{Feedback, Word};
use tracing::trace;

/// Check whether `word` could be the target given `feedback` for `guess`
///
/// Checks run cheapest first and stop at the first failure:
/// 1. length of `word` equals the guess length adjusted by Inserts minus Deletes
/// 2. edit distance from `guess` to `word` equals the reported distance
/// 3. the script from `guess` to `word` equals the reported script
///
/// The order only saves work; a word must pass all three either way.
///
/// # Examples
/// ```
/// use distle::core::{Feedback, Word};
/// use distle::guesser::is_consistent;
///
/// let guess = Word::new("cat").unwrap();
/// let feedback = Feedback::calculate(&guess, &Word::new("cot").unwrap());
///
/// assert!(is_consistent(&guess, &feedback, &Word::new("cot").unwrap()));
/// assert!(!is_consistent(&guess, &feedback, &Word::new("cats").unwrap()));
/// ```
#[must_use]
pub fn is_consistent(guess: &Word, feedback: &Feedback, word: &Word) -> bool {
    if feedback.expected_length(guess) != Some(word.len()) {
        return false;
    }

    // Distance and script come from one table
    let table = DistanceTable::build(guess.chars(), word.chars());
    if table.distance() != feedback.distance() {
        return false;
    }

    reconstruct(guess.chars(), word.chars(), &table) == feedback.transforms()
}

/// Keep the candidates consistent with one round of feedback, preserving order
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    feedback: &Feedback,
) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|&word| {
            let keep = is_consistent(guess, feedback, word);
            if !keep {
                trace!(%word, %guess, "pruned candidate");
            }
            keep
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transform;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn truthful_feedback_keeps_target() {
        let dictionary = words(&["cat", "cot", "cats", "dog", "act", "kitten", "sitting"]);
        for guess in &dictionary {
            for target in &dictionary {
                let feedback = Feedback::calculate(guess, target);
                assert!(
                    is_consistent(guess, &feedback, target),
                    "{target} pruned by its own feedback for {guess}"
                );
            }
        }
    }

    #[test]
    fn wrong_length_rejected_before_alignment() {
        let guess = Word::new("cat").unwrap();
        let feedback = Feedback::new(1, vec![Transform::Insert]);
        assert!(!is_consistent(&guess, &feedback, &Word::new("cot").unwrap()));
        assert!(is_consistent(&guess, &feedback, &Word::new("cats").unwrap()));
    }

    #[test]
    fn same_distance_different_script_rejected() {
        // Both at distance 1 from "cat", but one is a swap and one a replacement
        let guess = Word::new("cat").unwrap();
        let feedback = Feedback::new(1, vec![Transform::Replace]);
        assert!(is_consistent(&guess, &feedback, &Word::new("cot").unwrap()));
        assert!(!is_consistent(&guess, &feedback, &Word::new("act").unwrap()));
    }

    #[test]
    fn solved_feedback_keeps_only_guess() {
        let dictionary = words(&["cat", "cot", "cats"]);
        let refs: Vec<&Word> = dictionary.iter().collect();
        let guess = Word::new("cat").unwrap();

        let kept = filter_candidates(&refs, &guess, &Feedback::SOLVED);
        assert_eq!(kept, vec![&dictionary[0]]);
    }

    #[test]
    fn filter_scenario_cat_against_cot() {
        let dictionary = words(&["cat", "cot", "cats", "dog"]);
        let refs: Vec<&Word> = dictionary.iter().collect();
        let guess = Word::new("cat").unwrap();
        let feedback = Feedback::new(1, vec![Transform::Replace]);

        let kept = filter_candidates(&refs, &guess, &feedback);
        let texts: Vec<&str> = kept.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["cot"]);
    }

    #[test]
    fn malformed_feedback_can_empty_the_set() {
        let dictionary = words(&["cat", "cot", "dog"]);
        let refs: Vec<&Word> = dictionary.iter().collect();
        let guess = Word::new("cat").unwrap();
        // Claims distance 2 with a single tag: nothing aligns like that
        let feedback = Feedback::new(2, vec![Transform::Replace]);

        assert!(filter_candidates(&refs, &guess, &feedback).is_empty());
    }
}
