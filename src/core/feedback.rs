//! Round feedback: edit distance plus transformation script
//!
//! This is what the game reports after each guess. Two candidate targets are
//! indistinguishable to a guess exactly when they produce equal feedback, so
//! `Feedback` also serves as the outcome key when scoring guesses.

use super::transform::{UnknownTag, length_delta, parse_tags, tags_to_string};
use super::{Transform, Word};
use crate::align::{DistanceTable, reconstruct};
use std::fmt;
use thiserror::Error;

/// Distance and script for one (guess, target) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    distance: usize,
    transforms: Vec<Transform>,
}

/// Error type for unparseable feedback text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("Feedback is empty")]
    Empty,
    #[error("Invalid edit distance {0:?}")]
    InvalidDistance(String),
    #[error(transparent)]
    UnknownTag(#[from] UnknownTag),
    #[error("Distance {distance} does not match {tags} transform tags")]
    LengthMismatch { distance: usize, tags: usize },
}

impl Feedback {
    /// Feedback for a solved round
    pub const SOLVED: Self = Self {
        distance: 0,
        transforms: Vec::new(),
    };

    /// Wrap a distance and script as reported by a game driver
    ///
    /// No consistency check is made; the guesser takes driver feedback verbatim.
    #[must_use]
    pub const fn new(distance: usize, transforms: Vec<Transform>) -> Self {
        Self {
            distance,
            transforms,
        }
    }

    /// Compute the feedback a game would report when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use distle::core::{Feedback, Transform, Word};
    ///
    /// let guess = Word::new("cat").unwrap();
    /// let target = Word::new("cot").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.distance(), 1);
    /// assert_eq!(feedback.transforms(), &[Transform::Replace]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        if guess == target {
            return Self::SOLVED;
        }

        let table = DistanceTable::build(guess.chars(), target.chars());
        let transforms = reconstruct(guess.chars(), target.chars(), &table);
        Self {
            distance: table.distance(),
            transforms,
        }
    }

    #[inline]
    #[must_use]
    pub const fn distance(&self) -> usize {
        self.distance
    }

    #[inline]
    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// True when the guess was the target
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.distance == 0
    }

    /// Length the target must have: guess length plus Inserts minus Deletes
    ///
    /// Returns `None` if the script deletes more characters than the guess has.
    #[must_use]
    pub fn expected_length(&self, guess: &Word) -> Option<usize> {
        guess.len().checked_add_signed(length_delta(&self.transforms))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.distance, tags_to_string(&self.transforms))
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse `"<distance> <tags>"`, e.g. `"2 RT"`, `"2 [R, T]"` or `"0"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (distance_text, tags_text) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        if distance_text.is_empty() {
            return Err(FeedbackParseError::Empty);
        }

        let distance = distance_text
            .parse::<usize>()
            .map_err(|_| FeedbackParseError::InvalidDistance(distance_text.to_string()))?;
        let transforms = parse_tags(tags_text)?;

        if transforms.len() != distance {
            return Err(FeedbackParseError::LengthMismatch {
                distance,
                tags: transforms.len(),
            });
        }

        Ok(Self {
            distance,
            transforms,
        })
    }
}
