//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, feedback patterns
//! and observations. Everything here is pure and has no solver state.

mod observation;
mod pattern;
mod word;

pub use observation::Observation;
pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use word::{ALPHABET, WORD_LEN, Word, WordError};
