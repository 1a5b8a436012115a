//! Search-based solving strategies
//!
//! Four strategies share one candidate-filtering core and differ only in how
//! they pick the next guess.

pub mod candidates;
mod engine;
pub mod informed;
pub mod strategy;
pub mod uninformed;

pub use candidates::{CandidateSet, is_consistent};
pub use engine::{GameRecord, GuessStep, Outcome, Solver};
pub use informed::{AStar, UniformCost};
pub use strategy::{SearchState, Strategy, StrategyKind, StrategyType};
pub use uninformed::{BreadthFirst, DepthFirst};
