//! Guess selection strategies
//!
//! Defines the Strategy trait, the shared search state, and the enum used to
//! pick a strategy at runtime.

use super::candidates::CandidateSet;
use super::informed::{AStar, UniformCost};
use super::uninformed::{BreadthFirst, DepthFirst};
use crate::core::{Feedback, Word};
use crate::game::GameState;
use log::trace;
use std::sync::Arc;

/// Candidate set and node counter owned by one strategy instance
#[derive(Debug, Clone)]
pub struct SearchState {
    pool: Arc<[Word]>,
    candidates: CandidateSet,
    nodes_expanded: usize,
}

impl SearchState {
    /// Start from the full pool of `game`
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        let pool = game.shared_pool();
        let candidates = CandidateSet::new(&pool);
        Self {
            pool,
            candidates,
            nodes_expanded: 0,
        }
    }

    /// Refill the candidates from the pool and zero the counter
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::new(&self.pool);
        self.nodes_expanded = 0;
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.candidates.members()
    }

    #[inline]
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }
}

/// A policy for picking the next guess from the remaining candidates
///
/// Implementors supply `choose`, a pure function of the current candidates.
/// The provided methods handle the bookkeeping every strategy shares.
pub trait Strategy {
    /// Short name used on the command line
    fn name(&self) -> &'static str;

    fn search(&self) -> &SearchState;

    fn search_mut(&mut self) -> &mut SearchState;

    /// Pick a candidate without removing it
    ///
    /// Returns `None` only if `candidates` is empty.
    fn choose<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word>;

    /// Select the next guess, counting one node expansion if one was found
    ///
    /// Returns `None` when no candidates remain. The candidate set is not
    /// modified; that happens in `filter_candidates` once feedback is known.
    fn select_next(&mut self) -> Option<Word> {
        let guess = self.choose(self.search().candidates())?.clone();
        self.search_mut().nodes_expanded += 1;
        trace!("{} selected {guess}", self.name());
        Some(guess)
    }

    /// Keep only candidates consistent with `guess` having scored `feedback`
    fn filter_candidates(&mut self, guess: &Word, feedback: Feedback) {
        self.search_mut().candidates.filter(guess, feedback);
    }

    /// Start over from the full pool with a zeroed counter
    fn reset(&mut self) {
        self.search_mut().reset();
    }

    fn nodes_expanded(&self) -> usize {
        self.search().nodes_expanded()
    }

    fn candidates(&self) -> &[Word] {
        self.search().candidates()
    }
}

/// Which strategy to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    AStar,
}

impl StrategyKind {
    pub const ALL: [Self; 4] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::AStar,
    ];

    /// Parse a strategy name
    ///
    /// Supported names: "bfs", "dfs", "ucs", "astar" (plus long forms)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth-first" => Some(Self::DepthFirst),
            "ucs" | "uniform-cost" => Some(Self::UniformCost),
            "astar" | "a*" | "a-star" | "heuristic" => Some(Self::AStar),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    /// Human-readable label for reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First Search",
            Self::DepthFirst => "Depth-First Search",
            Self::UniformCost => "Uniform-Cost Search",
            Self::AStar => "A* Search",
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    BreadthFirst(BreadthFirst),
    DepthFirst(DepthFirst),
    UniformCost(UniformCost),
    AStar(AStar),
}

impl StrategyType {
    /// Build a strategy of the given kind over `game`'s word pool
    #[must_use]
    pub fn new(kind: StrategyKind, game: &GameState) -> Self {
        match kind {
            StrategyKind::BreadthFirst => Self::BreadthFirst(BreadthFirst::new(game)),
            StrategyKind::DepthFirst => Self::DepthFirst(DepthFirst::new(game)),
            StrategyKind::UniformCost => Self::UniformCost(UniformCost::new(game)),
            StrategyKind::AStar => Self::AStar(AStar::new(game)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::BreadthFirst(_) => StrategyKind::BreadthFirst,
            Self::DepthFirst(_) => StrategyKind::DepthFirst,
            Self::UniformCost(_) => StrategyKind::UniformCost,
            Self::AStar(_) => StrategyKind::AStar,
        }
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn search(&self) -> &SearchState {
        match self {
            Self::BreadthFirst(s) => s.search(),
            Self::DepthFirst(s) => s.search(),
            Self::UniformCost(s) => s.search(),
            Self::AStar(s) => s.search(),
        }
    }

    fn search_mut(&mut self) -> &mut SearchState {
        match self {
            Self::BreadthFirst(s) => s.search_mut(),
            Self::DepthFirst(s) => s.search_mut(),
            Self::UniformCost(s) => s.search_mut(),
            Self::AStar(s) => s.search_mut(),
        }
    }

    fn choose<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::BreadthFirst(s) => s.choose(candidates),
            Self::DepthFirst(s) => s.choose(candidates),
            Self::UniformCost(s) => s.choose(candidates),
            Self::AStar(s) => s.choose(candidates),
        }
    }
}
