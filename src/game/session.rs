//! Game state machine
//!
//! A `GameSession` is owned by the presentation layer and mutated only through
//! `accept_letter`, `delete_letter` and `submit_guess` (or `apply` with an
//! `InputEvent`). Each call finishes its transition before returning and reports
//! what changed as an `Update`.

use super::validator::{Rejection, validate_guess};
use crate::core::{Feedback, KeyboardState, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::wordlists::WordBank;
use rand::Rng;
use tracing::{debug, info};

/// Overall game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Player input, already mapped from physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Submit,
    Delete,
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of one state-machine call, for re-rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The call was not valid in the current state; nothing changed
    Ignored,
    /// Pending letters changed
    Pending(String),
    /// Submission refused; no row consumed
    Rejected(Rejection),
    /// A row was evaluated
    Evaluated {
        guess: EvaluatedGuess,
        /// 1-based row number of this guess
        attempt: usize,
        outcome: Outcome,
    },
}

/// State of one game against a fixed target word
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    bank: &'a WordBank,
    target: Word,
    guesses: Vec<EvaluatedGuess>,
    pending: String,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl<'a> GameSession<'a> {
    /// Start a game against `target`
    #[must_use]
    pub fn new(bank: &'a WordBank, target: Word) -> Self {
        Self {
            bank,
            target,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            pending: String::with_capacity(WORD_LENGTH),
            keyboard: KeyboardState::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start the game for a day offset since the epoch
    #[must_use]
    pub fn daily(bank: &'a WordBank, day_offset: i64) -> Self {
        Self::new(bank, bank.daily_target(day_offset).clone())
    }

    /// Start a game against a uniformly random target
    #[must_use]
    pub fn random<R: Rng + ?Sized>(bank: &'a WordBank, rng: &mut R) -> Self {
        Self::new(bank, bank.random_target(rng).clone())
    }

    /// Add a letter to the pending guess
    ///
    /// Ignored once the game is over, when the guess is already full, or for
    /// anything other than an ASCII letter.
    pub fn accept_letter(&mut self, ch: char) -> Update {
        if self.outcome.is_finished()
            || self.pending.len() >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            return Update::Ignored;
        }

        self.pending.push(ch.to_ascii_lowercase());
        Update::Pending(self.pending.clone())
    }

    /// Remove the last pending letter
    pub fn delete_letter(&mut self) -> Update {
        if self.outcome.is_finished() || self.pending.pop().is_none() {
            return Update::Ignored;
        }
        Update::Pending(self.pending.clone())
    }

    /// Validate, evaluate and record the pending guess
    pub fn submit_guess(&mut self) -> Update {
        if self.outcome.is_finished() {
            return Update::Ignored;
        }

        let word = match validate_guess(&self.pending, self.bank) {
            Ok(word) => word,
            Err(rejection) => {
                debug!(pending = %self.pending, %rejection, "guess rejected");
                return Update::Rejected(rejection);
            }
        };

        let feedback = Feedback::evaluate(&word, &self.target);
        self.keyboard.record(&word, &feedback);
        self.pending.clear();

        let guess = EvaluatedGuess { word, feedback };
        self.guesses.push(guess.clone());
        let attempt = self.guesses.len();

        self.outcome = if feedback.is_solved() {
            Outcome::Won
        } else if attempt == MAX_ATTEMPTS {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        debug!(guess = %guess.word, feedback = %feedback, attempt, "guess evaluated");
        match self.outcome {
            Outcome::Won => info!(attempt, "game won"),
            Outcome::Lost => info!(target = %self.target, "game lost"),
            Outcome::InProgress => {}
        }

        Update::Evaluated {
            guess,
            attempt,
            outcome: self.outcome,
        }
    }

    /// Dispatch an input event to the matching transition
    pub fn apply(&mut self, event: InputEvent) -> Update {
        match event {
            InputEvent::Letter(ch) => self.accept_letter(ch),
            InputEvent::Submit => self.submit_guess(),
            InputEvent::Delete => self.delete_letter(),
        }
    }

    /// Text to show the player for an update, if any
    ///
    /// Rejections and finished games produce a message; everything else is silent.
    #[must_use]
    pub fn message(&self, update: &Update) -> Option<String> {
        match update {
            Update::Rejected(rejection) => Some(rejection.to_string()),
            Update::Evaluated {
                outcome: Outcome::Won,
                attempt,
                ..
            } => Some(win_message(*attempt).to_string()),
            Update::Evaluated {
                outcome: Outcome::Lost,
                ..
            } => Some(self.target.text().to_uppercase()),
            _ => None,
        }
    }

    /// Text that shares the result grid without revealing letters
    ///
    /// Returns `None` while the game is still in progress.
    #[must_use]
    pub fn share_text(&self, day_label: &str) -> Option<String> {
        let score = match self.outcome {
            Outcome::InProgress => return None,
            Outcome::Won => self.guesses.len().to_string(),
            Outcome::Lost => "X".to_string(),
        };

        let mut text = format!("Wordle {day_label} {score}/{MAX_ATTEMPTS}\n");
        for guess in &self.guesses {
            text.push('\n');
            text.push_str(&guess.feedback.to_emoji());
        }
        Some(text)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[EvaluatedGuess] {
        &self.guesses
    }

    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.guesses.len()
    }
}

/// Win message by number of guesses used
#[must_use]
pub const fn win_message(attempt: usize) -> &'static str {
    match attempt {
        1 => "Genius",
        2 => "Magnificent",
        3 => "Impressive",
        4 => "Splendid",
        5 => "Great",
        _ => "Phew",
    }
}
