//! Game state: the word pool, the secret, and whether the game has concluded

use crate::config::WORD_LENGTH;
use crate::core::{Feedback, LetterStatus, Word, WordError};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::sync::Arc;

/// Errors building a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word pool has no words to draw a secret from
    EmptyPool,
    /// A requested secret is not in the word pool
    UnknownSecret(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Word pool is empty"),
            Self::UnknownSecret(word) => write!(f, "Secret '{word}' is not in the word pool"),
        }
    }
}

impl std::error::Error for GameError {}

/// A single disclosed letter of the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub letter: char,
    /// Zero-based position of `letter` in the secret
    pub position: usize,
}

/// One game: a fixed word pool and a secret drawn from it
///
/// The pool is shared read-only (`Arc`), so any number of games and solvers
/// can be built over the same list without copying it.
#[derive(Debug, Clone)]
pub struct GameState {
    pool: Arc<[Word]>,
    secret: Word,
    concluded: bool,
}

impl GameState {
    /// Create a game with a secret drawn uniformly from `pool`
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the pool has no words.
    pub fn new(pool: impl Into<Arc<[Word]>>) -> Result<Self, GameError> {
        Self::with_rng(pool, &mut rand::rng())
    }

    /// Create a game, drawing the secret with the given RNG
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the pool has no words.
    pub fn with_rng<R: Rng + ?Sized>(
        pool: impl Into<Arc<[Word]>>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let pool = pool.into();
        let secret = pool.choose(rng).cloned().ok_or(GameError::EmptyPool)?;

        Ok(Self {
            pool,
            secret,
            concluded: false,
        })
    }

    /// Create a game with a chosen secret
    ///
    /// # Errors
    /// Returns `GameError::UnknownSecret` if `secret` is not in the pool.
    pub fn with_secret(pool: impl Into<Arc<[Word]>>, secret: &Word) -> Result<Self, GameError> {
        let pool = pool.into();
        if !pool.contains(secret) {
            return Err(GameError::UnknownSecret(secret.text().to_string()));
        }

        Ok(Self {
            pool,
            secret: secret.clone(),
            concluded: false,
        })
    }

    /// Draw a new secret and reopen the game
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::rng());
    }

    /// Draw a new secret with the given RNG and reopen the game
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // The pool was non-empty at construction and never changes
        if let Some(secret) = self.pool.choose(rng) {
            self.secret = secret.clone();
        }
        self.concluded = false;
        debug!("new game over {} words", self.pool.len());
    }

    /// Whether `word` (any case) is in the word pool
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.pool.contains(&w))
    }

    /// Score a raw guess against the secret
    ///
    /// The guess is normalized to lowercase first. Dictionary membership is
    /// not checked here; use `is_valid_word` for that.
    ///
    /// # Errors
    /// Returns `WordError` if the guess is not a 5-letter alphabetic word.
    pub fn check_guess(&self, guess: &str) -> Result<Feedback, WordError> {
        let guess = Word::new(guess)?;
        Ok(self.score(&guess))
    }

    /// Score an already validated guess against the secret
    #[must_use]
    pub fn score(&self, guess: &Word) -> Feedback {
        Feedback::evaluate(guess, &self.secret)
    }

    /// Disclose one letter of the secret
    ///
    /// - Concluded game: nothing
    /// - No previous guess: the letter at a random position
    /// - Last guess had Present letters: one of them, at its first position in the secret
    /// - Otherwise: the letter at a random position not yet Correct
    ///
    /// Returns `None` when there is nothing left to disclose.
    pub fn hint<R: Rng + ?Sized>(&self, last_guess: Option<&Word>, rng: &mut R) -> Option<Hint> {
        if self.concluded {
            return None;
        }

        let Some(guess) = last_guess else {
            return Some(self.reveal(rng.random_range(0..WORD_LENGTH)));
        };

        let feedback = self.score(guess);
        let present = feedback.positions(LetterStatus::Present);

        if let Some(&index) = present.choose(rng) {
            let letter = guess.char_at(index);
            let position = self.secret.position_of(letter)?;
            return Some(Hint {
                letter: letter as char,
                position,
            });
        }

        let hidden: Vec<usize> = (0..WORD_LENGTH)
            .filter(|&i| feedback.statuses()[i] != LetterStatus::Correct)
            .collect();

        hidden.choose(rng).map(|&position| self.reveal(position))
    }

    fn reveal(&self, position: usize) -> Hint {
        Hint {
            letter: self.secret.char_at(position) as char,
            position,
        }
    }

    /// Mark the game as over (won or out of attempts)
    pub fn conclude(&mut self) {
        self.concluded = true;
    }

    #[inline]
    #[must_use]
    pub const fn is_concluded(&self) -> bool {
        self.concluded
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The full word pool, in its original order
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// A shared handle to the word pool
    #[inline]
    #[must_use]
    pub fn shared_pool(&self) -> Arc<[Word]> {
        Arc::clone(&self.pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> Vec<Word> {
        words_from_slice(&["apple", "sheep", "speed", "melon", "world"])
    }

    fn game_with(secret: &str) -> GameState {
        GameState::with_secret(pool(), &Word::new(secret).unwrap()).unwrap()
    }

    #[test]
    fn new_game_draws_secret_from_pool() {
        let words = pool();
        let game = GameState::new(words.clone()).unwrap();
        assert!(words.contains(game.secret()));
        assert!(!game.is_concluded());
    }

    #[test]
    fn empty_pool_is_rejected() {
        let result = GameState::new(Vec::<Word>::new());
        assert!(matches!(result, Err(GameError::EmptyPool)));
    }

    #[test]
    fn unknown_secret_is_rejected() {
        let zebra = Word::new("zebra").unwrap();
        let err = GameState::with_secret(pool(), &zebra).unwrap_err();
        assert_eq!(err, GameError::UnknownSecret("zebra".to_string()));
    }

    #[test]
    fn reset_reopens_and_redraws_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = GameState::with_rng(pool(), &mut rng).unwrap();
        game.conclude();
        assert!(game.is_concluded());

        game.reset_with(&mut rng);
        assert!(!game.is_concluded());
        assert!(game.pool().contains(game.secret()));
    }

    #[test]
    fn is_valid_word_checks_membership() {
        let game = game_with("apple");
        assert!(game.is_valid_word("melon"));
        assert!(game.is_valid_word("MELON"));
        assert!(!game.is_valid_word("zebra"));
        assert!(!game.is_valid_word("mel"));
    }

    #[test]
    fn check_guess_normalizes_case() {
        let game = game_with("speed");
        let feedback = game.check_guess("SHEEP").unwrap();
        assert_eq!(
            feedback.statuses(),
            &[Correct, Absent, Correct, Correct, Present]
        );
        // Scoring never concludes the game on its own
        assert!(!game.is_concluded());
    }

    #[test]
    fn check_guess_rejects_bad_length() {
        let game = game_with("speed");
        assert_eq!(game.check_guess("sped"), Err(WordError::InvalidLength(4)));
    }

    #[test]
    fn check_guess_of_secret_is_win() {
        let game = game_with("melon");
        assert!(game.check_guess("melon").unwrap().is_win());
    }

    #[test]
    fn hint_without_guesses_reveals_secret_letter() {
        let game = game_with("world");
        let mut rng = StdRng::seed_from_u64(1);
        let hint = game.hint(None, &mut rng).unwrap();
        assert_eq!(game.secret().char_at(hint.position) as char, hint.letter);
    }

    #[test]
    fn hint_prefers_present_letters() {
        // "hello" vs "world": only the final 'o' is Present
        let game = game_with("world");
        let mut rng = StdRng::seed_from_u64(1);
        let hint = game.hint(Some(&Word::new("hello").unwrap()), &mut rng);
        assert_eq!(
            hint,
            Some(Hint {
                letter: 'o',
                position: 1,
            })
        );
    }

    #[test]
    fn hint_falls_back_to_hidden_position() {
        // "shell" vs "sheep": s, h, e green; both l's absent
        let game = game_with("sheep");
        let mut rng = StdRng::seed_from_u64(3);
        let shell = Word::new("shell").unwrap();
        let hint = game.hint(Some(&shell), &mut rng).unwrap();
        assert!(hint.position == 3 || hint.position == 4);
        assert_eq!(game.secret().char_at(hint.position) as char, hint.letter);
    }

    #[test]
    fn hint_none_when_solved_or_concluded() {
        let mut game = game_with("sheep");
        let mut rng = StdRng::seed_from_u64(3);
        let sheep = Word::new("sheep").unwrap();
        assert!(game.hint(Some(&sheep), &mut rng).is_none());

        game.conclude();
        assert!(game.hint(None, &mut rng).is_none());
    }

    #[test]
    fn shared_pool_is_not_copied() {
        let game = game_with("apple");
        let other = game.shared_pool();
        assert!(std::ptr::eq(game.pool().as_ptr(), other.as_ptr()));
    }
}
