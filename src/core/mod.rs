//! Core domain types
//!
//! Words and the feedback evaluator. Everything here is pure and shared by the
//! game engine and every solver strategy.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{Word, WordError};
