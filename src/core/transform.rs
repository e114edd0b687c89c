//! Edit operation tags
//!
//! The four unit-cost operations of the alignment engine, with their stable
//! one-letter tags:
//! - `I` = Insert a character of the target
//! - `D` = Delete a character of the guess
//! - `R` = Replace a guess character with a target character
//! - `T` = Transpose two adjacent guess characters
//!
//! A transformation script lists tags in traversal order: the first tag edits
//! the rightmost differing position of the two words.

use std::fmt;
use thiserror::Error;

/// A single edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transform {
    Insert,
    Delete,
    Replace,
    Transpose,
}

/// Error for characters outside the `I`/`D`/`R`/`T` alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown transform tag {0:?} (expected I, D, R or T)")]
pub struct UnknownTag(pub char);

impl Transform {
    /// All operations in tag order
    pub const ALL: [Self; 4] = [Self::Insert, Self::Delete, Self::Replace, Self::Transpose];

    /// The one-letter tag for this operation
    #[inline]
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Insert => 'I',
            Self::Delete => 'D',
            Self::Replace => 'R',
            Self::Transpose => 'T',
        }
    }

    /// Change in word length caused by this operation
    #[inline]
    #[must_use]
    pub const fn length_change(self) -> isize {
        match self {
            Self::Insert => 1,
            Self::Delete => -1,
            Self::Replace | Self::Transpose => 0,
        }
    }
}

impl TryFrom<char> for Transform {
    type Error = UnknownTag;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag.to_ascii_uppercase() {
            'I' => Ok(Self::Insert),
            'D' => Ok(Self::Delete),
            'R' => Ok(Self::Replace),
            'T' => Ok(Self::Transpose),
            _ => Err(UnknownTag(tag)),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Net length change of a script: Inserts minus Deletes
///
/// # Examples
/// ```
/// use distle::core::{Transform, length_delta};
///
/// let script = [Transform::Insert, Transform::Insert, Transform::Delete, Transform::Replace];
/// assert_eq!(length_delta(&script), 1);
/// ```
#[must_use]
pub fn length_delta(transforms: &[Transform]) -> isize {
    transforms.iter().map(|t| t.length_change()).sum()
}

/// Render a script as its tag string, e.g. "RTI"
#[must_use]
pub fn tags_to_string(transforms: &[Transform]) -> String {
    transforms.iter().map(|t| t.tag()).collect()
}

/// Parse a tag string such as "RTI" or "R, T, I"
///
/// Whitespace, commas and square brackets are ignored.
///
/// # Errors
/// Returns `UnknownTag` for the first character outside the tag alphabet.
pub fn parse_tags(s: &str) -> Result<Vec<Transform>, UnknownTag> {
    s.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '[' | ']'))
        .map(Transform::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stable() {
        let tags: String = Transform::ALL.iter().map(|t| t.tag()).collect();
        assert_eq!(tags, "IDRT");
    }

    #[test]
    fn tag_parsing_is_case_insensitive() {
        assert_eq!(Transform::try_from('t'), Ok(Transform::Transpose));
        assert_eq!(Transform::try_from('R'), Ok(Transform::Replace));
        assert_eq!(Transform::try_from('x'), Err(UnknownTag('x')));
    }

    #[test]
    fn length_delta_ignores_replace_and_transpose() {
        assert_eq!(length_delta(&[]), 0);
        assert_eq!(length_delta(&[Transform::Replace, Transform::Transpose]), 0);
        assert_eq!(length_delta(&[Transform::Delete, Transform::Delete]), -2);
    }

    #[test]
    fn parse_tags_accepts_separators() {
        let expected = vec![Transform::Replace, Transform::Transpose, Transform::Insert];
        assert_eq!(parse_tags("RTI").unwrap(), expected);
        assert_eq!(parse_tags("[R, T, I]").unwrap(), expected);
        assert_eq!(parse_tags("r t i").unwrap(), expected);
        assert!(parse_tags("").unwrap().is_empty());
    }

    #[test]
    fn parse_tags_rejects_unknown() {
        assert_eq!(parse_tags("RXT"), Err(UnknownTag('X')));
    }

    #[test]
    fn tags_to_string_renders_in_order() {
        assert_eq!(
            tags_to_string(&[Transform::Delete, Transform::Insert]),
            "DI"
        );
    }
}
