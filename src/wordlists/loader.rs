//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded fallback.

use super::FALLBACK;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lowercased; anything that is not a 5-letter
/// alphabetic word is skipped. File order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_search::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Load words from `path`, or the embedded fallback list
///
/// Falls back when no path is given, the file cannot be read, or it holds no
/// usable words.
#[must_use]
pub fn load_or_fallback(path: Option<&Path>) -> Vec<Word> {
    let Some(path) = path else {
        info!(
            "no word list given, using {} embedded words",
            FALLBACK.len()
        );
        return words_from_slice(FALLBACK);
    };

    match load_from_file(path) {
        Ok(words) if !words.is_empty() => {
            info!("loaded {} words from {}", words.len(), path.display());
            words
        }
        Ok(_) => {
            warn!(
                "{} has no 5-letter words, using embedded list",
                path.display()
            );
            words_from_slice(FALLBACK)
        }
        Err(e) => {
            warn!("cannot load {}: {e}, using embedded list", path.display());
            words_from_slice(FALLBACK)
        }
    }
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_search::wordlists::loader::words_from_slice;
/// use wordle_search::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}
