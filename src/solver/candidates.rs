//! Candidate tracking
//!
//! The set of words still consistent with every (guess, feedback) pair seen.

use crate::core::{Feedback, Word};
use log::debug;

/// Whether `candidate` would have produced `feedback` had it been the secret
///
/// Runs the same evaluator that scores real guesses, with the candidate
/// standing in for the secret.
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: Feedback) -> bool {
    Feedback::evaluate(guess, candidate) == feedback
}

/// Ordered words still in play
///
/// Only shrinks: filtering keeps the consistent subsequence in its existing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    members: Vec<Word>,
}

impl CandidateSet {
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            members: words.to_vec(),
        }
    }

    /// Drop every member inconsistent with `guess` having scored `feedback`
    pub fn filter(&mut self, guess: &Word, feedback: Feedback) {
        let before = self.members.len();
        self.members
            .retain(|candidate| is_consistent(candidate, guess, feedback));
        debug!(
            "{guess} {feedback}: {before} -> {} candidates",
            self.members.len()
        );
    }

    #[inline]
    #[must_use]
    pub fn members(&self) -> &[Word] {
        &self.members
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FALLBACK;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn secret_is_consistent_with_its_own_feedback() {
        let words = words_from_slice(FALLBACK);
        for secret in &words {
            for guess in &words {
                let feedback = Feedback::evaluate(guess, secret);
                assert!(
                    is_consistent(secret, guess, feedback),
                    "{secret} dropped after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn inconsistent_candidate_is_rejected() {
        let guess = word("stare");
        let feedback = Feedback::evaluate(&guess, &word("tears"));
        assert!(is_consistent(&word("tears"), &guess, feedback));
        assert!(!is_consistent(&word("plant"), &guess, feedback));
    }

    #[test]
    fn filter_preserves_order_and_keeps_secret() {
        let secret = word("plate");
        let guess = word("plant");
        let mut set = CandidateSet::new(&words_from_slice(FALLBACK));

        set.filter(&guess, Feedback::evaluate(&guess, &secret));

        assert!(set.contains(&secret));
        let texts: Vec<&str> = set.members().iter().map(Word::text).collect();
        let mut sorted_by_pool = texts.clone();
        sorted_by_pool.sort_by_key(|w| FALLBACK.iter().position(|f| f == w));
        assert_eq!(texts, sorted_by_pool);
    }

    #[test]
    fn filter_shrinks_monotonically() {
        let secret = word("storm");
        let mut set = CandidateSet::new(&words_from_slice(FALLBACK));
        let mut previous = set.len();

        for guess in ["adieu", "stare", "spoon", "storm"] {
            let guess = word(guess);
            set.filter(&guess, Feedback::evaluate(&guess, &secret));
            assert!(set.len() <= previous);
            assert!(set.contains(&secret));
            previous = set.len();
        }

        assert_eq!(set.members(), &[secret]);
    }

    #[test]
    fn contradictory_feedback_empties_set() {
        let mut set = CandidateSet::new(&words_from_slice(FALLBACK));
        // No word in the list is "zzzzz", so an all-green claim rules out everything
        set.filter(&word("zzzzz"), Feedback::ALL_CORRECT);
        assert!(set.is_empty());
    }
}
