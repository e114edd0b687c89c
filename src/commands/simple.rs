//! Simple interactive CLI mode
//!
//! The user hides a word, the guesser proposes guesses and the user types
//! back the distance and transformation tags for each one.

use crate::core::{Feedback, FeedbackParseError, Word};
use crate::error::{GuesserError, SessionError};
use crate::guesser::{Guesser, Strategy, calculate_metrics};
use crate::output::formatters::format_feedback;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails, or if the
/// guesser rejects the dictionary or guess budget.
pub fn run_simple<'a, S: Strategy>(
    guesser: &mut Guesser<'a, S>,
    dictionary: &'a [Word],
    max_guesses: usize,
) -> Result<(), SessionError> {
    let mut session = Session {
        input: io::stdin().lock(),
        output: io::stdout(),
    };
    session.run(guesser, dictionary, max_guesses)
}

/// What the user typed in answer to a guess
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Feedback(Feedback),
    Win,
    NewGame,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum GameEnd {
    Again,
    Quit,
}

fn parse_reply(line: &str) -> Result<Reply, FeedbackParseError> {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Reply::Quit),
        "new" | "n" => Ok(Reply::NewGame),
        "win" | "correct" | "yes" | "solved" => Ok(Reply::Win),
        _ => Feedback::from_str(line).map(Reply::Feedback),
    }
}

struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn run<'a, S: Strategy>(
        &mut self,
        guesser: &mut Guesser<'a, S>,
        dictionary: &'a [Word],
        max_guesses: usize,
    ) -> Result<(), SessionError> {
        self.print_banner()?;

        loop {
            guesser.start_new_game(dictionary, max_guesses)?;
            let end = self.play(guesser)?;
            guesser.end_game();

            if end == GameEnd::Quit {
                writeln!(self.output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            writeln!(self.output, "\n🔄 New game started!\n")?;
        }
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(out, "║                  Distle - Interactive Mode                   ║")?;
        writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
        writeln!(out, "Think of a word. After each guess, enter the edit distance")?;
        writeln!(out, "from my guess to your word and the transformation tags:\n")?;
        writeln!(out, "  I insert, D delete, R replace, T transpose")?;
        writeln!(out, "  e.g. '2 RT' or '2 [R, T]'; '0' or 'win' when I got it\n")?;
        writeln!(out, "Commands: 'quit' to exit, 'new' for new game\n")
    }

    fn play<S: Strategy>(&mut self, guesser: &mut Guesser<'_, S>) -> Result<GameEnd, SessionError> {
        loop {
            let turn = guesser.guesses_made() + 1;
            let candidate_count = guesser.candidate_count();

            if guesser.remaining_guesses() == Some(0) {
                let used = guesser.guesses_made();
                writeln!(self.output, "\n❌ Out of guesses after {used} turns.")?;
                return Ok(self.ask_again()?);
            }

            let guess = match guesser.make_guess() {
                Ok(guess) => guess,
                Err(GuesserError::CandidatesExhausted { .. }) => {
                    writeln!(
                        self.output,
                        "\n❌ No candidates remain! Your feedback may be incorrect."
                    )?;
                    return Ok(self.ask_again()?);
                }
                Err(err) => return Err(err.into()),
            };

            let metrics = calculate_metrics(guess, guesser.candidates());
            writeln!(self.output, "{}", "─".repeat(60))?;
            writeln!(self.output, "Turn {turn}: {candidate_count} candidates remaining")?;
            writeln!(self.output, "{}", "─".repeat(60))?;
            writeln!(
                self.output,
                "\n📊 Suggested guess: {}",
                guess.text().bright_yellow().bold()
            )?;
            writeln!(self.output, "   Entropy:          {:.3} bits", metrics.entropy)?;
            writeln!(
                self.output,
                "   Expected remain:  {:.1} candidates",
                metrics.expected_remaining
            )?;
            writeln!(
                self.output,
                "   Worst case:       {} candidates\n",
                metrics.max_partition
            )?;

            if candidate_count <= 10 {
                writeln!(self.output, "Remaining candidates:")?;
                for candidate in guesser.candidates() {
                    writeln!(self.output, "  • {candidate}")?;
                }
                writeln!(self.output)?;
            }

            let reply = loop {
                let Some(line) = self.prompt("Enter feedback ('2 RT', 'win', or command)")? else {
                    return Ok(GameEnd::Quit);
                };
                match parse_reply(&line) {
                    Ok(reply) => break reply,
                    Err(err) => writeln!(self.output, "❌ {err}. Try e.g. '2 RT' or '0'\n")?,
                }
            };

            match reply {
                Reply::Quit => return Ok(GameEnd::Quit),
                Reply::NewGame => return Ok(GameEnd::Again),
                Reply::Win => {
                    self.celebrate(guess, turn)?;
                    return Ok(self.ask_again()?);
                }
                Reply::Feedback(feedback) => {
                    writeln!(self.output, "   {} → {}", guess, format_feedback(&feedback))?;
                    guesser.apply_feedback(guess, &feedback)?;
                    if feedback.is_solved() {
                        self.celebrate(guess, turn)?;
                        return Ok(self.ask_again()?);
                    }
                }
            }
        }
    }

    fn celebrate(&mut self, word: &Word, turn: usize) -> io::Result<()> {
        writeln!(self.output, "\n{}", "═".repeat(60).bright_cyan())?;
        writeln!(
            self.output,
            "  🎉 {} {}",
            "Solved:".bright_green().bold(),
            word.text().bright_white().bold()
        )?;
        writeln!(
            self.output,
            "  Solution found in {} {}",
            turn.to_string().bright_cyan().bold(),
            if turn == 1 { "guess" } else { "guesses" }
        )?;
        writeln!(self.output, "{}\n", "═".repeat(60).bright_cyan())
    }

    fn ask_again(&mut self) -> io::Result<GameEnd> {
        match self.prompt("Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                Ok(GameEnd::Again)
            }
            _ => Ok(GameEnd::Quit),
        }
    }

    /// Prompt for one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
