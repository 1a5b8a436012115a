//! A single played game: guesses, attempts and the win/lose transition

use super::{GameState, Hint};
use crate::config::MAX_ATTEMPTS;
use crate::core::{Feedback, Word, WordError};
use log::info;
use rand::Rng;
use std::fmt;

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The game is already won or lost
    Concluded,
    /// Not a 5-letter word
    Invalid(WordError),
    /// Well-formed but not in the word pool
    NotInWordList(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concluded => write!(f, "The game is over"),
            Self::Invalid(e) => write!(f, "{e}"),
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<WordError> for SubmitError {
    fn from(e: WordError) -> Self {
        Self::Invalid(e)
    }
}

/// State of the game after an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Continue,
    Won,
    Lost,
}

/// An accepted guess and what it led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub outcome: SubmitOutcome,
}

/// Drives one game, enforcing dictionary membership and the attempt budget
pub struct Session {
    state: GameState,
    turns: Vec<Turn>,
    max_attempts: usize,
}

impl Session {
    #[must_use]
    pub const fn new(state: GameState) -> Self {
        Self {
            state,
            turns: Vec::new(),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Submit a guess
    ///
    /// Concludes the game on an all-Correct result or when the last attempt
    /// is used.
    ///
    /// # Errors
    /// Returns `SubmitError` if the game is over, the guess is malformed, or
    /// it is not in the word pool. Rejected guesses do not use an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<&Turn, SubmitError> {
        if self.state.is_concluded() {
            return Err(SubmitError::Concluded);
        }

        let guess = Word::new(guess)?;
        if !self.state.is_valid_word(guess.text()) {
            return Err(SubmitError::NotInWordList(guess.text().to_string()));
        }

        let feedback = self.state.score(&guess);
        let outcome = if feedback.is_win() {
            SubmitOutcome::Won
        } else if self.turns.len() + 1 >= self.max_attempts {
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Continue
        };

        if outcome != SubmitOutcome::Continue {
            self.state.conclude();
            info!(
                "game over ({outcome:?}), secret was {}",
                self.state.secret()
            );
        }

        self.turns.push(Turn {
            guess,
            feedback,
            outcome,
        });
        Ok(&self.turns[self.turns.len() - 1])
    }

    /// Start over with a new secret from the same pool
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state.reset_with(rng);
        self.turns.clear();
    }

    /// Disclose one letter of the secret, based on the last guess
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Hint> {
        self.state.hint(self.turns.last().map(|t| &t.guess), rng)
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.turns.len())
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_concluded()
    }
}
