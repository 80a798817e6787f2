//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Render a guess as colored tiles, one letter per feedback square
#[must_use]
pub fn colored_tiles(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.feedback())
        .map(|(letter, feedback)| tile(letter, feedback).to_string())
        .collect()
}

fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Feedback::Hit => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// Uppercase, comma-separated word list
#[must_use]
pub fn word_list(words: &[&Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 8.0; // log2 of the 243 pattern classes, rounded up
    create_progress_bar(entropy, max_entropy, width)
}
