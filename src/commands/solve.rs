//! Word solving command
//!
//! Plays one automated game with a chosen strategy and returns every step.

use crate::config::MAX_ATTEMPTS;
use crate::core::{Word, WordError};
use crate::game::{GameError, GameState};
use crate::solver::{GameRecord, Solver, StrategyKind, StrategyType};
use std::fmt;
use std::sync::Arc;

/// Configuration for solving a word
pub struct SolveConfig {
    pub strategy: StrategyKind,
    /// Secret to play against; drawn at random when `None`
    pub target: Option<String>,
    pub max_attempts: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(strategy: StrategyKind, target: Option<String>) -> Self {
        Self {
            strategy,
            target,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub strategy: StrategyKind,
    pub record: GameRecord,
}

/// Why a solve could not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    InvalidTarget(WordError),
    Game(GameError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(e) => write!(f, "Invalid target word: {e}"),
            Self::Game(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<WordError> for SolveError {
    fn from(e: WordError) -> Self {
        Self::InvalidTarget(e)
    }
}

impl From<GameError> for SolveError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

/// Solve one game over `pool` using the configured strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is not a valid 5-letter word
/// - The target word is not in the pool
/// - The pool is empty
pub fn solve_word(config: SolveConfig, pool: &Arc<[Word]>) -> Result<SolveResult, SolveError> {
    let mut game = match config.target {
        Some(target) => GameState::with_secret(Arc::clone(pool), &Word::new(target)?)?,
        None => GameState::new(Arc::clone(pool))?,
    };

    let strategy = StrategyType::new(config.strategy, &game);
    let record = Solver::new(strategy)
        .with_max_attempts(config.max_attempts)
        .play(&mut game);

    Ok(SolveResult {
        strategy: config.strategy,
        record,
    })
}
