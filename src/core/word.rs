//! Distle word representation
//!
//! A Word stores the text as given alongside its character sequence so the
//! alignment engine can index characters without re-decoding UTF-8.

use std::fmt;
use thiserror::Error;

/// A dictionary word of any non-zero length
///
/// The text is kept exactly as given: case, hyphens and apostrophes are all
/// part of the word, so `"Cat"` and `"cat"` are one edit apart. Length and
/// indexing are by `char`, not by byte, so accented letters count once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// No normalisation is applied; see [`Word::to_lowercase`].
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text is empty.
    ///
    /// # Examples
    /// ```
    /// use distle::core::Word;
    ///
    /// let word = Word::new("co-op").unwrap();
    /// assert_eq!(word.text(), "co-op");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert_ne!(Word::new("Cat").unwrap(), Word::new("cat").unwrap());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// The same word in lowercase, for case-insensitive games
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        let text = self.text.to_lowercase();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
