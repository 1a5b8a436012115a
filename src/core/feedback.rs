//! Guess feedback calculation and representation
//!
//! Feedback is the per-position verdict of a guess against a target word:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the target
//! - Absent (gray): no unmatched occurrence of the letter remains
//!
//! The same evaluator scores real guesses and simulates feedback against
//! candidate words while filtering, so both always agree.

use super::Word;
use crate::config::WORD_LENGTH;
use std::fmt;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Numeric code: 0 = absent, 1 = present, 2 = correct
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a whole guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (the win condition)
    pub const ALL_CORRECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Compute the feedback for `guess` when `target` is the secret
    ///
    /// # Algorithm
    /// 1. Count the target's letters
    /// 2. First pass: mark exact matches Correct and consume one count each
    /// 3. Second pass: mark remaining positions Present while a count is left,
    ///    consuming it, otherwise Absent
    ///
    /// Greens must be settled before any yellow is handed out, otherwise an
    /// early yellow can steal the count a later green needs.
    ///
    /// # Examples
    /// ```
    /// use wordle_search::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("sheep").unwrap();
    /// let target = Word::new("speed").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &target).statuses(),
    ///     &[Correct, Absent, Correct, Correct, Present]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining = target.char_counts();

        // Allow: index needed to compare guess[i] with target[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                result[i] = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position statuses, in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Whether every position is Correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Positions with the given status, ascending
    #[must_use]
    pub fn positions(&self, status: LetterStatus) -> Vec<usize> {
        (0..WORD_LENGTH).filter(|&i| self.0[i] == status).collect()
    }

    /// Numeric codes per position (0/1/2)
    #[must_use]
    pub fn codes(&self) -> [u8; WORD_LENGTH] {
        self.0.map(LetterStatus::code)
    }

    /// Render as emoji tiles, e.g. "🟩⬛🟩🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
