//! Order-based strategies
//!
//! Both ignore word content and pick purely by position in the candidate
//! order, which is the pool order minus whatever filtering removed.

use super::strategy::{SearchState, Strategy};
use crate::core::Word;
use crate::game::GameState;

/// Queue order: always guess the earliest remaining candidate
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    search: SearchState,
}

impl BreadthFirst {
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        Self {
            search: SearchState::new(game),
        }
    }
}

impl Strategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(&self) -> &SearchState {
        &self.search
    }

    fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    fn choose<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.first()
    }
}

/// Stack order: always guess the latest remaining candidate
#[derive(Debug, Clone)]
pub struct DepthFirst {
    search: SearchState,
}

impl DepthFirst {
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        Self {
            search: SearchState::new(game),
        }
    }
}

impl Strategy for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search(&self) -> &SearchState {
        &self.search
    }

    fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    fn choose<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.last()
    }
}
