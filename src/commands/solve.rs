//! Game driver
//!
//! Plays one game against a known target: the driver computes the true
//! feedback for every guess and hands it back to the guesser.

use crate::core::{Feedback, Word};
use crate::error::GameError;
use crate::guesser::{Guesser, Strategy};
use tracing::info;

/// Configuration for one driven game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of a driven game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub target: String,
    pub success: bool,
    pub guesses: Vec<GuessStep>,
}

impl GameResult {
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// One round of a game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play a game of Distle with `guesser` against `config.target`
///
/// The game ends when the guesser hits the target or the guess budget is
/// spent. The guesser's game is ended either way.
///
/// # Errors
///
/// - `InvalidTarget` if the target is empty
/// - `Guesser` if the guesser runs out of candidates, which happens when the
///   target is not in the dictionary
///
/// # Examples
/// ```
/// use distle::commands::solve::{GameConfig, play_game};
/// use distle::guesser::{EntropyStrategy, Guesser};
/// use distle::wordlists::words_from_slice;
///
/// let dictionary = words_from_slice(&["cat", "cot", "cats", "dog", "act"]);
/// let mut guesser = Guesser::new(EntropyStrategy);
///
/// let result = play_game(&mut guesser, &dictionary, GameConfig::new("act".into())).unwrap();
/// assert!(result.success);
/// ```
pub fn play_game<'a, S: Strategy>(
    guesser: &mut Guesser<'a, S>,
    dictionary: &'a [Word],
    config: GameConfig,
) -> Result<GameResult, GameError> {
    let target = Word::new(&config.target)?;
    guesser.start_new_game(dictionary, config.max_guesses)?;

    let mut guesses = Vec::new();
    let outcome = play_rounds(guesser, &target, config.max_guesses, &mut guesses);
    guesser.end_game();
    let success = outcome?;

    info!(
        word = %target,
        success,
        guesses = guesses.len(),
        "game finished"
    );

    Ok(GameResult {
        target: config.target,
        success,
        guesses,
    })
}

fn play_rounds<S: Strategy>(
    guesser: &mut Guesser<'_, S>,
    target: &Word,
    max_guesses: usize,
    steps: &mut Vec<GuessStep>,
) -> Result<bool, GameError> {
    while steps.len() < max_guesses {
        let candidates_before = guesser.candidate_count();
        let guess = guesser.make_guess()?;

        let feedback = Feedback::calculate(guess, target);
        guesser.apply_feedback(guess, &feedback)?;

        let solved = feedback.is_solved();
        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: guesser.candidate_count(),
        });

        if solved {
            return Ok(true);
        }
    }

    Ok(false)
}
