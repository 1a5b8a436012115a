//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Color one letter tile by its status
#[must_use]
pub fn tile(letter: u8, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", (letter as char).to_ascii_uppercase());
    match status {
        LetterStatus::Correct => text.white().bold().on_green(),
        LetterStatus::Present => text.black().bold().on_yellow(),
        LetterStatus::Absent => text.white().bold().on_bright_black(),
    }
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn render_guess(guess: &Word, feedback: Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| tile(letter, status).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_guess_shows_every_letter() {
        colored::control::set_override(false);
        let guess = Word::new("sheep").unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::new("speed").unwrap());
        assert_eq!(render_guess(&guess, feedback), " S  H  E  E  P ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
