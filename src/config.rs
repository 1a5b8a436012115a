//! Static game configuration
//!
//! Word length, attempt budget and the letter-frequency weights used by the
//! cost-based and heuristic strategies.

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// English letter frequencies in hundredths of a percent, indexed `a..=z`
///
/// Stored as integers so sums are exact and equal scores tie exactly,
/// whatever order the letters are added in.
pub const LETTER_FREQ: [u32; 26] = [
    850,  // a
    207,  // b
    454,  // c
    338,  // d
    1116, // e
    181,  // f
    247,  // g
    300,  // h
    754,  // i
    20,   // j
    110,  // k
    549,  // l
    301,  // m
    665,  // n
    716,  // o
    317,  // p
    20,   // q
    758,  // r
    574,  // s
    695,  // t
    363,  // u
    101,  // v
    129,  // w
    29,   // x
    178,  // y
    27,   // z
];

/// Frequency weight of a letter, in hundredths; 0 for anything outside `a..=z`
#[inline]
#[must_use]
pub const fn letter_weight(letter: u8) -> u32 {
    if letter.is_ascii_lowercase() {
        LETTER_FREQ[(letter - b'a') as usize]
    } else {
        0
    }
}
