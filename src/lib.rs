//! Distle
//!
//! A guesser for Distle, a word game where every guess is answered with its
//! restricted Damerau–Levenshtein distance to the hidden word plus the list of
//! insert, delete, replace and transpose edits that turn the guess into it.
//!
//! # Quick Start
//!
//! ```rust
//! use distle::align::get_transformation_list;
//! use distle::core::{Feedback, Word};
//!
//! let guess = Word::new("kitten").unwrap();
//! let target = Word::new("sitting").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.to_string(), "3 [IRR]");
//! assert_eq!(get_transformation_list("cat", "act").len(), 1);
//! ```

// Core domain types
pub mod core;

// Edit distance and transformation scripts
pub mod align;

// Candidate filtering and guess selection
pub mod guesser;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Error types
pub mod error;

// Tracing subscriber setup
pub mod logging;
