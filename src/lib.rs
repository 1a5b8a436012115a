//! Wordle Search
//!
//! A Wordle engine with classic search strategies as automated players:
//! breadth-first, depth-first, uniform-cost and A*, all narrowing a shared
//! candidate set with the same two-pass feedback rules.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_search::core::{Feedback, Word};
//! use wordle_search::game::GameState;
//! use wordle_search::solver::{Solver, StrategyKind, StrategyType};
//! use wordle_search::wordlists::{FALLBACK, loader::words_from_slice};
//!
//! let guess = Word::new("sheep").unwrap();
//! let secret = Word::new("speed").unwrap();
//! assert_eq!(Feedback::evaluate(&guess, &secret).codes(), [2, 0, 2, 2, 1]);
//!
//! let pool = words_from_slice(FALLBACK);
//! let mut game = GameState::with_secret(pool, &Word::new("storm").unwrap()).unwrap();
//! let strategy = StrategyType::new(StrategyKind::AStar, &game);
//! let record = Solver::new(strategy).play(&mut game);
//! assert!(record.attempts() <= 6);
//! ```

// Game constants and letter weights
pub mod config;

// Core domain types
pub mod core;

// Game state and sessions
pub mod game;

// Search strategies and the automated player
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
