//! Expected-remaining scoring (bot mode)
//!
//! Scores guesses against the curated solution pool instead of the full
//! vocabulary, with word popularity as a tiebreak.

mod calculator;
mod scorer;

pub use calculator::{calculate_expected_remaining, score_bot};
pub use scorer::BotScorer;
