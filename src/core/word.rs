//! Word representation
//!
//! A Word is a validated 5-letter lowercase ASCII word. Words order
//! lexicographically, which the priority-based strategies rely on for tie-breaks.

use crate::config::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated 5-letter word
///
/// Field order matters: the derived `Ord` compares `text` first, giving plain
/// lexicographic ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_search::core::Word;
    ///
    /// let word = Word::new("Sheep").unwrap();
    /// assert_eq!(word.text(), "sheep");
    ///
    /// assert!(Word::new("sheeps").is_err());
    /// assert!(Word::new("sh33p").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// First position of `letter` in the word, if present
    #[inline]
    #[must_use]
    pub fn position_of(&self, letter: u8) -> Option<usize> {
        self.chars.iter().position(|&ch| ch == letter)
    }

    /// Iterate over the distinct letters of the word, in first-seen order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.chars[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }

    /// Get the count of each letter in the word
    ///
    /// This is the multiset the feedback evaluator consumes.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("sheep").unwrap();
        assert_eq!(word.text(), "sheep");
        assert_eq!(word.chars(), b"sheep");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "apple");

        let word2 = Word::new(" ApPlE\n").unwrap();
        assert_eq!(word2.text(), "apple");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("bananas"), Err(WordError::InvalidLength(7))));
        assert!(matches!(Word::new("pear"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("appl3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ap-le"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("applé"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at_and_position_of() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.char_at(0), b's');
        assert_eq!(word.char_at(4), b'd');
        assert_eq!(word.position_of(b'e'), Some(2));
        assert_eq!(word.position_of(b'z'), None);
    }

    #[test]
    fn word_distinct_letters_skips_repeats() {
        let word = Word::new("sheep").unwrap();
        let letters: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(letters, b"shep".to_vec());

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.distinct_letters().count(), 1);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["tears", "stare", "arise", "tiger"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["arise", "stare", "tears", "tiger"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Ocean".parse().unwrap();
        assert_eq!(format!("{word}"), "ocean");
    }
}
