//! Error types shared across the guesser, word lists and game drivers.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Contract violations by whoever drives a [`Guesser`](crate::guesser::Guesser)
///
/// All of these end the current game; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuesserError {
    #[error("dictionary is empty")]
    EmptyDictionary,

    #[error("guess budget must be at least 1")]
    InvalidGuessBudget,

    #[error("no game in progress; call start_new_game first")]
    NotActive,

    /// Every remaining candidate has been guessed, or feedback pruned them all
    #[error("no untried candidates remain ({remaining} candidates left, all guessed)")]
    CandidatesExhausted { remaining: usize },
}

/// Errors while loading a dictionary file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary {} contains no valid words", path.display())]
    NoWords { path: PathBuf },
}

/// Errors from a driven game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),

    #[error(transparent)]
    Guesser(#[from] GuesserError),
}

/// Errors from an interactive session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Guesser(#[from] GuesserError),
}
