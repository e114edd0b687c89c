//! Candidate-narrowing guesser

use super::filter::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Feedback, Transform, Word};
use crate::error::GuesserError;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Lifecycle of one game
enum GameState<'a> {
    Uninitialized,
    Active(Game<'a>),
    Done,
}

/// Per-game state, owned exclusively by one guesser
struct Game<'a> {
    dictionary: &'a [Word],
    max_guesses: usize,
    /// Words still consistent with every round of feedback, in dictionary order
    candidates: Vec<&'a Word>,
    /// Words already returned by `make_guess`
    guessed: FxHashSet<&'a Word>,
}

/// Distle guesser
///
/// Keeps the set of dictionary words consistent with all feedback so far and
/// picks each next guess from it using a [`Strategy`]. Each game needs its own
/// guesser or a fresh `start_new_game`; nothing is shared between instances.
///
/// # Examples
/// ```
/// use distle::core::{Feedback, Word};
/// use distle::guesser::{Guesser, RandomStrategy};
///
/// let dictionary: Vec<Word> = ["cat", "cot", "cats", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let target = Word::new("cot").unwrap();
///
/// let mut guesser = Guesser::new(RandomStrategy::seeded(42));
/// guesser.start_new_game(&dictionary, 4).unwrap();
///
/// let guess = guesser.make_guess().unwrap();
/// let feedback = Feedback::calculate(guess, &target);
/// guesser
///     .get_feedback(guess, feedback.distance(), feedback.transforms())
///     .unwrap();
///
/// assert!(guesser.candidates().contains(&&target));
/// ```
pub struct Guesser<'a, S: Strategy> {
    strategy: S,
    state: GameState<'a>,
}

impl<'a, S: Strategy> Guesser<'a, S> {
    /// Create an uninitialized guesser using `strategy` to pick guesses
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            state: GameState::Uninitialized,
        }
    }

    /// Start a game over `dictionary` with a budget of `max_guesses`
    ///
    /// The candidate set becomes a copy of the dictionary (duplicates dropped)
    /// and the guess history is cleared. Calling this again starts over.
    ///
    /// # Errors
    /// - `EmptyDictionary` if `dictionary` has no words
    /// - `InvalidGuessBudget` if `max_guesses` is 0
    pub fn start_new_game(
        &mut self,
        dictionary: &'a [Word],
        max_guesses: usize,
    ) -> Result<(), GuesserError> {
        if dictionary.is_empty() {
            return Err(GuesserError::EmptyDictionary);
        }
        if max_guesses == 0 {
            return Err(GuesserError::InvalidGuessBudget);
        }

        let mut seen = FxHashSet::default();
        let candidates: Vec<&'a Word> = dictionary.iter().filter(|w| seen.insert(*w)).collect();

        debug!(
            words = candidates.len(),
            max_guesses, "starting new game"
        );

        self.state = GameState::Active(Game {
            dictionary,
            max_guesses,
            candidates,
            guessed: FxHashSet::default(),
        });
        Ok(())
    }

    /// Pick the next guess from the candidates not yet guessed
    ///
    /// The guess budget is not checked here; drivers stop asking once
    /// [`Guesser::remaining_guesses`] reaches zero.
    ///
    /// # Errors
    /// - `NotActive` if no game is in progress
    /// - `CandidatesExhausted` if every candidate has been guessed (or
    ///   feedback eliminated them all)
    pub fn make_guess(&mut self) -> Result<&'a Word, GuesserError> {
        let GameState::Active(game) = &mut self.state else {
            return Err(GuesserError::NotActive);
        };

        let untried: Vec<&'a Word> = game
            .candidates
            .iter()
            .copied()
            .filter(|word| !game.guessed.contains(word))
            .collect();

        let guess = self
            .strategy
            .select_guess(&untried, &game.candidates)
            .ok_or(GuesserError::CandidatesExhausted {
                remaining: game.candidates.len(),
            })?;

        debug_assert!(!game.guessed.contains(guess), "strategy returned a repeat guess");
        game.guessed.insert(guess);

        debug!(
            %guess,
            untried = untried.len(),
            candidates = game.candidates.len(),
            turn = game.guessed.len(),
            "made guess"
        );
        Ok(guess)
    }

    /// Narrow the candidates with the feedback a driver reported for `guess`
    ///
    /// The distance and script are trusted as given. Feedback that no word
    /// could produce empties the candidate set, which the next `make_guess`
    /// reports as `CandidatesExhausted`.
    ///
    /// # Errors
    /// Returns `NotActive` if no game is in progress.
    pub fn get_feedback(
        &mut self,
        guess: &Word,
        edit_dist: usize,
        transforms: &[Transform],
    ) -> Result<(), GuesserError> {
        self.apply_feedback(guess, &Feedback::new(edit_dist, transforms.to_vec()))
    }

    /// Same as [`get_feedback`](Self::get_feedback), taking a [`Feedback`] value
    ///
    /// # Errors
    /// Returns `NotActive` if no game is in progress.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), GuesserError> {
        let GameState::Active(game) = &mut self.state else {
            return Err(GuesserError::NotActive);
        };

        let before = game.candidates.len();
        game.candidates = filter_candidates(&game.candidates, guess, feedback);

        debug!(
            %guess,
            %feedback,
            before,
            after = game.candidates.len(),
            "applied feedback"
        );
        Ok(())
    }

    /// Finish the current game; further guesses and feedback are rejected
    pub fn end_game(&mut self) {
        self.state = GameState::Done;
    }

    /// True while a game is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, GameState::Active(_))
    }

    /// Current candidate set (empty when no game is active)
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        match &self.state {
            GameState::Active(game) => &game.candidates,
            GameState::Uninitialized | GameState::Done => &[],
        }
    }

    /// Number of candidates still consistent with all feedback
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates().len()
    }

    /// Number of guesses made this game
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        match &self.state {
            GameState::Active(game) => game.guessed.len(),
            GameState::Uninitialized | GameState::Done => 0,
        }
    }

    /// Guesses left in the budget, or `None` when no game is active
    #[must_use]
    pub fn remaining_guesses(&self) -> Option<usize> {
        match &self.state {
            GameState::Active(game) => Some(game.max_guesses.saturating_sub(game.guessed.len())),
            GameState::Uninitialized | GameState::Done => None,
        }
    }

    /// The dictionary of the current game
    #[must_use]
    pub fn dictionary(&self) -> Option<&'a [Word]> {
        match &self.state {
            GameState::Active(game) => Some(game.dictionary),
            GameState::Uninitialized | GameState::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guesser::{EntropyStrategy, RandomStrategy};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn calls_before_start_are_rejected() {
        let mut guesser = Guesser::new(RandomStrategy::seeded(1));
        let cat = Word::new("cat").unwrap();

        assert!(!guesser.is_active());
        assert_eq!(guesser.make_guess(), Err(GuesserError::NotActive));
        assert_eq!(guesser.get_feedback(&cat, 0, &[]), Err(GuesserError::NotActive));
        assert_eq!(guesser.remaining_guesses(), None);
    }

    #[test]
    fn start_validates_preconditions() {
        let mut guesser = Guesser::new(RandomStrategy::seeded(1));
        let dictionary = words(&["cat"]);

        assert_eq!(guesser.start_new_game(&[], 6), Err(GuesserError::EmptyDictionary));
        assert_eq!(
            guesser.start_new_game(&dictionary, 0),
            Err(GuesserError::InvalidGuessBudget)
        );
        assert!(!guesser.is_active());
    }

    #[test]
    fn start_copies_dictionary_without_duplicates() {
        let mut guesser = Guesser::new(RandomStrategy::seeded(1));
        let dictionary = words(&["cat", "dog", "cat"]);

        guesser.start_new_game(&dictionary, 6).unwrap();
        assert_eq!(texts(guesser.candidates()), vec!["cat", "dog"]);
        assert_eq!(guesser.remaining_guesses(), Some(6));
        assert_eq!(guesser.dictionary().map(<[Word]>::len), Some(3));
    }

    #[test]
    fn never_repeats_a_guess() {
        let dictionary = words(&["cat", "cot", "cut", "dog", "dig"]);
        let mut guesser = Guesser::new(RandomStrategy::seeded(3));
        guesser.start_new_game(&dictionary, 10).unwrap();

        let mut seen = FxHashSet::default();
        for _ in 0..dictionary.len() {
            let guess = guesser.make_guess().unwrap();
            assert!(seen.insert(guess.text().to_string()), "repeated {guess}");
        }

        assert_eq!(
            guesser.make_guess(),
            Err(GuesserError::CandidatesExhausted { remaining: 5 })
        );
    }

    #[test]
    fn guess_budget_is_reported_not_enforced() {
        let dictionary = words(&["cat", "cot", "cut"]);
        let mut guesser = Guesser::new(RandomStrategy::seeded(3));
        guesser.start_new_game(&dictionary, 1).unwrap();

        let first = guesser.make_guess().unwrap();
        assert_eq!(guesser.remaining_guesses(), Some(0));

        // Past the budget the guesser still answers; stopping is the driver's call
        let second = guesser.make_guess().unwrap();
        assert_ne!(first, second);
        assert_eq!(guesser.guesses_made(), 2);
        assert_eq!(guesser.remaining_guesses(), Some(0));
    }

    #[test]
    fn feedback_scenario_keeps_only_cot() {
        let dictionary = words(&["cat", "cot", "cats", "dog"]);
        let mut guesser = Guesser::new(RandomStrategy::seeded(5));
        guesser.start_new_game(&dictionary, 6).unwrap();

        let cat = Word::new("cat").unwrap();
        guesser.get_feedback(&cat, 1, &[Transform::Replace]).unwrap();

        assert_eq!(texts(guesser.candidates()), vec!["cot"]);
        assert_eq!(guesser.make_guess().unwrap().text(), "cot");
    }

    #[test]
    fn truthful_feedback_never_prunes_target() {
        let dictionary = words(&[
            "cat", "cot", "cut", "act", "cats", "coat", "dog", "dig", "god", "kitten", "sitting",
        ]);
        for target in &dictionary {
            let mut guesser = Guesser::new(RandomStrategy::seeded(11));
            guesser.start_new_game(&dictionary, dictionary.len()).unwrap();

            let mut previous = guesser.candidate_count();
            loop {
                let guess = guesser.make_guess().unwrap();
                let feedback = Feedback::calculate(guess, target);
                guesser.apply_feedback(guess, &feedback).unwrap();

                assert!(guesser.candidates().contains(&target));
                assert!(guesser.candidate_count() <= previous);
                previous = guesser.candidate_count();

                if feedback.is_solved() {
                    break;
                }
            }
        }
    }

    #[test]
    fn impossible_feedback_exhausts_candidates() {
        let dictionary = words(&["cat", "cot", "dog"]);
        let mut guesser = Guesser::new(EntropyStrategy);
        guesser.start_new_game(&dictionary, 6).unwrap();

        let cat = Word::new("cat").unwrap();
        guesser.get_feedback(&cat, 3, &[Transform::Insert]).unwrap();

        assert_eq!(guesser.candidate_count(), 0);
        assert_eq!(
            guesser.make_guess(),
            Err(GuesserError::CandidatesExhausted { remaining: 0 })
        );
    }

    #[test]
    fn end_game_deactivates() {
        let dictionary = words(&["cat"]);
        let mut guesser = Guesser::new(RandomStrategy::seeded(1));
        guesser.start_new_game(&dictionary, 6).unwrap();
        guesser.end_game();

        assert!(!guesser.is_active());
        assert!(guesser.candidates().is_empty());
        assert_eq!(guesser.make_guess(), Err(GuesserError::NotActive));
    }

    #[test]
    fn restart_resets_history() {
        let dictionary = words(&["cat"]);
        let mut guesser = Guesser::new(RandomStrategy::seeded(1));

        guesser.start_new_game(&dictionary, 6).unwrap();
        assert_eq!(guesser.make_guess().unwrap().text(), "cat");

        guesser.start_new_game(&dictionary, 6).unwrap();
        assert_eq!(guesser.guesses_made(), 0);
        assert_eq!(guesser.make_guess().unwrap().text(), "cat");
    }
}
