//! The game engine
//!
//! `GameState` holds the pool and secret and scores guesses; `Session` plays
//! a full game on top of it.

mod session;
mod state;

pub use session::{Session, SubmitError, SubmitOutcome, Turn};
pub use state::{GameError, GameState, Hint};
