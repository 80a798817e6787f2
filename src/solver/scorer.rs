//! Guess scoring strategies
//!
//! Defines the Scorer trait shared by the entropy and bot modes, the scored
//! candidate record the ranker sorts, and the runtime-selectable `ScorerKind`.

use super::entropy::EntropyScorer;
use super::expected::BotScorer;
use crate::core::Word;
use std::cmp::Ordering;

/// Which scoring mode a session ranks with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Maximize entropy over the full guess vocabulary
    #[default]
    Entropy,
    /// Minimize expected remaining solutions, popularity breaks ties
    Bot,
}

impl Mode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entropy => "entropy",
            Self::Bot => "bot",
        }
    }
}

/// Raw output of a scorer for one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub primary: f64,
    pub secondary: f64,
}

/// A guess annotated with its score against the current pool
///
/// In entropy mode `primary` is entropy in bits and `secondary` the expected
/// remaining; in bot mode `primary` is the expected remaining and `secondary`
/// the frequency score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a Word,
    pub primary: f64,
    pub secondary: f64,
    pub is_possible_answer: bool,
}

/// Scores a guess against a pool and defines the preference order
///
/// Implementations must be `Sync`: the ranker scores guesses on the rayon pool.
pub trait Scorer: Sync {
    /// Score `guess` against every word of `pool`
    fn score(&self, guess: &Word, pool: &[&Word]) -> Score;

    /// `Less` means `a` is the better guess
    ///
    /// Must be a total order; the ranker appends the word as a final key.
    fn compare(&self, a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering;
}

/// Enum wrapper for both scorer types
///
/// Allows runtime selection of the mode while keeping static dispatch.
pub enum ScorerKind<'a> {
    Entropy(EntropyScorer),
    Bot(BotScorer<'a>),
}

impl ScorerKind<'_> {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Entropy(_) => Mode::Entropy,
            Self::Bot(_) => Mode::Bot,
        }
    }
}

impl Scorer for ScorerKind<'_> {
    fn score(&self, guess: &Word, pool: &[&Word]) -> Score {
        match self {
            Self::Entropy(s) => s.score(guess, pool),
            Self::Bot(s) => s.score(guess, pool),
        }
    }

    fn compare(&self, a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
        match self {
            Self::Entropy(s) => s.compare(a, b),
            Self::Bot(s) => s.compare(a, b),
        }
    }
}

/// Scores are compared at 1e-9 resolution so that values differing only by
/// summation order compare equal, while keeping the order transitive.
pub(crate) fn quantize(value: f64) -> i64 {
    (value * 1e9).round() as i64
}
