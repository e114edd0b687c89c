//! Core domain types for Distle
//!
//! Words, edit operation tags and per-round feedback. Everything here is pure
//! and cheap to clone.

mod feedback;
mod transform;
mod word;

pub use feedback::{Feedback, FeedbackParseError};
pub use transform::{Transform, UnknownTag, length_delta, parse_tags, tags_to_string};
pub use word::{Word, WordError};
