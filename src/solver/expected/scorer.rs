//! Bot-mode scorer
//!
//! Minimizes the expected remaining solutions; among guesses with the same
//! expectation, the more popular word wins.

use super::calculator::score_bot;
use crate::core::Word;
use crate::solver::scorer::{Score, ScoredCandidate, Scorer, quantize};
use crate::wordlists::FrequencyTable;
use std::cmp::Ordering;

/// Expected-remaining scorer with a frequency tiebreak
pub struct BotScorer<'a> {
    frequencies: &'a FrequencyTable,
}

impl<'a> BotScorer<'a> {
    #[must_use]
    pub const fn new(frequencies: &'a FrequencyTable) -> Self {
        Self { frequencies }
    }
}

impl Scorer for BotScorer<'_> {
    fn score(&self, guess: &Word, pool: &[&Word]) -> Score {
        let (expected_remaining, frequency) = score_bot(guess, pool, self.frequencies);
        Score {
            primary: expected_remaining,
            secondary: frequency,
        }
    }

    fn compare(&self, a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
        quantize(a.primary)
            .cmp(&quantize(b.primary))
            .then(b.secondary.total_cmp(&a.secondary))
    }
}
