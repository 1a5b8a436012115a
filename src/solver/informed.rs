//! Letter-frequency guided strategies
//!
//! Uniform-cost and A* both push every candidate into a min-priority queue
//! keyed by a score built from `config::LETTER_FREQ`, then take the cheapest.
//! Equal scores fall back to lexicographic word order.
//!
//! The two scores differ in how repeated letters count: uniform-cost credits
//! each distinct letter once, while the A* heuristic credits every position.
//! Words with doubled common letters ("eerie") therefore rank far better under
//! A* than under uniform-cost.
//!
//! All scores are in hundredths of a frequency percent.

use super::strategy::{SearchState, Strategy};
use crate::config::letter_weight;
use crate::core::Word;
use crate::game::GameState;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Base cost every word starts from before letter credits (100.00)
pub const BASE_COST: i64 = 10_000;

/// Path cost `g` of one guess (1.00)
pub const STEP_COST: i64 = 100;

/// `100 - Σ weight(distinct letters)`
#[must_use]
pub fn uniform_cost(word: &Word) -> i64 {
    let credit: u32 = word.distinct_letters().map(letter_weight).sum();
    BASE_COST - i64::from(credit)
}

/// `h(w) = -Σ weight(every letter)`, repeats included
#[must_use]
pub fn heuristic(word: &Word) -> i64 {
    let credit: u32 = word.chars().iter().map(|&ch| letter_weight(ch)).sum();
    -i64::from(credit)
}

/// `f(w) = g + h(w)` with constant `g`
#[must_use]
pub fn a_star_score(word: &Word) -> i64 {
    STEP_COST + heuristic(word)
}

/// Priority queue entry; derived ordering compares `score`, then `word`
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Frontier<'a> {
    score: i64,
    word: &'a Word,
}

/// Lowest-scoring candidate, ties broken by word order
fn cheapest<'a>(candidates: &'a [Word], score: impl Fn(&Word) -> i64) -> Option<&'a Word> {
    let mut queue: BinaryHeap<Reverse<Frontier<'a>>> = candidates
        .iter()
        .map(|word| {
            Reverse(Frontier {
                score: score(word),
                word,
            })
        })
        .collect();

    queue.pop().map(|Reverse(entry)| entry.word)
}

/// Picks the candidate with the lowest `uniform_cost`
#[derive(Debug, Clone)]
pub struct UniformCost {
    search: SearchState,
}

impl UniformCost {
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        Self {
            search: SearchState::new(game),
        }
    }
}

impl Strategy for UniformCost {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn search(&self) -> &SearchState {
        &self.search
    }

    fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    fn choose<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        cheapest(candidates, uniform_cost)
    }
}

/// Picks the candidate with the lowest `a_star_score`
#[derive(Debug, Clone)]
pub struct AStar {
    search: SearchState,
}

impl AStar {
    #[must_use]
    pub fn new(game: &GameState) -> Self {
        Self {
            search: SearchState::new(game),
        }
    }
}

impl Strategy for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(&self) -> &SearchState {
        &self.search
    }

    fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    fn choose<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word> {
        cheapest(candidates, a_star_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn game(words: &[&str]) -> GameState {
        let pool = words_from_slice(words);
        let secret = pool[0].clone();
        GameState::with_secret(pool, &secret).unwrap()
    }

    #[test]
    fn uniform_cost_counts_distinct_letters_once() {
        // e + r + i
        assert_eq!(uniform_cost(&word("eerie")), 10_000 - (1116 + 758 + 754));
        // s + t + a + r + e
        assert_eq!(uniform_cost(&word("stare")), 10_000 - 3993);
    }

    #[test]
    fn heuristic_counts_every_letter() {
        assert_eq!(heuristic(&word("eerie")), -(3 * 1116 + 758 + 754));
        assert_eq!(a_star_score(&word("eerie")), 100 - 4860);
        assert_eq!(a_star_score(&word("stare")), 100 - 3993);
    }

    #[test]
    fn anagrams_score_identically() {
        assert_eq!(uniform_cost(&word("stare")), uniform_cost(&word("tears")));
        assert_eq!(a_star_score(&word("arise")), a_star_score(&word("raise")));
    }

    #[test]
    fn repeated_letters_split_the_two_strategies() {
        let game = game(&["sheep", "tears", "eerie", "stare"]);
        let mut ucs = UniformCost::new(&game);
        let mut astar = AStar::new(&game);

        assert_eq!(ucs.select_next().unwrap().text(), "stare");
        assert_eq!(astar.select_next().unwrap().text(), "eerie");
    }

    #[test]
    fn ties_break_lexicographically() {
        let game = game(&["tears", "stare", "rates"]);
        let mut ucs = UniformCost::new(&game);
        let mut astar = AStar::new(&game);

        assert_eq!(ucs.select_next().unwrap().text(), "rates");
        assert_eq!(astar.select_next().unwrap().text(), "rates");
    }

    #[test]
    fn cheapest_of_nothing_is_none() {
        assert!(cheapest(&[], uniform_cost).is_none());
    }

    #[test]
    fn selection_does_not_consume_candidates() {
        let game = game(&["tears", "stare", "zebra"]);
        let mut ucs = UniformCost::new(&game);

        assert_eq!(ucs.select_next(), ucs.select_next());
        assert_eq!(ucs.candidates().len(), 3);
        assert_eq!(ucs.nodes_expanded(), 2);
    }
}
