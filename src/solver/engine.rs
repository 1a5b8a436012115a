//! Automated play: runs a strategy against a game until it ends

use super::strategy::Strategy;
use crate::config::MAX_ATTEMPTS;
use crate::core::{Feedback, Word};
use crate::game::GameState;
use log::debug;

/// How an automated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The secret was guessed
    Won,
    /// The attempt budget ran out first
    OutOfAttempts,
    /// The strategy had no candidates left to guess
    NoCandidates,
}

/// A single guess step in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of one automated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub secret: Word,
    pub steps: Vec<GuessStep>,
    pub outcome: Outcome,
    pub nodes_expanded: usize,
}

impl GameRecord {
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// Drives a strategy through select, score and filter steps
pub struct Solver<S: Strategy> {
    strategy: S,
    max_attempts: usize,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver with the standard attempt budget
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Override the attempt budget
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Take one turn: select a guess, score it against `game`, filter
    ///
    /// Returns `None` when the strategy has no candidates left.
    pub fn step(&mut self, game: &GameState) -> Option<GuessStep> {
        let candidates_before = self.strategy.candidates().len();
        let guess = self.strategy.select_next()?;
        let feedback = game.score(&guess);
        self.strategy.filter_candidates(&guess, feedback);

        Some(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.strategy.candidates().len(),
        })
    }

    /// Play `game` to the end from the strategy's current state
    ///
    /// Concludes the game when it is won or the budget is used up; a game
    /// abandoned for lack of candidates is left open.
    pub fn play(&mut self, game: &mut GameState) -> GameRecord {
        let mut steps = Vec::new();

        let outcome = loop {
            if steps.len() >= self.max_attempts {
                game.conclude();
                break Outcome::OutOfAttempts;
            }

            let Some(step) = self.step(game) else {
                break Outcome::NoCandidates;
            };

            let won = step.feedback.is_win();
            steps.push(step);

            if won {
                game.conclude();
                break Outcome::Won;
            }
        };

        debug!(
            "{} vs {}: {outcome:?} after {} guesses",
            self.strategy.name(),
            game.secret(),
            steps.len()
        );

        GameRecord {
            secret: game.secret().clone(),
            steps,
            outcome,
            nodes_expanded: self.strategy.nodes_expanded(),
        }
    }
}
