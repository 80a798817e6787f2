//! The possibility pool: every word still consistent with the feedback so far

use crate::core::{Pattern, Word};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Pools at least this large are filtered on the rayon pool
const PARALLEL_THRESHOLD: usize = 1024;

/// Keep the words of `pool` that would have produced `pattern` for `guess`
///
/// Order is preserved. The comparison is exact equality against
/// [`Pattern::calculate`]; no normalization is applied to `pattern`.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word};
/// use wordle_advisor::solver::pool::narrow;
///
/// let words = [Word::new("crate").unwrap(), Word::new("tonus").unwrap()];
/// let pool: Vec<&Word> = words.iter().collect();
/// let guess = Word::new("crane").unwrap();
///
/// let left = narrow(&pool, &guess, Pattern::calculate(&guess, &words[1]));
/// assert_eq!(left, vec![&words[1]]);
/// ```
#[must_use]
pub fn narrow<'a>(pool: &[&'a Word], guess: &Word, pattern: Pattern) -> Vec<&'a Word> {
    let consistent = |word: &&'a Word| Pattern::calculate(guess, word) == pattern;

    if pool.len() >= PARALLEL_THRESHOLD {
        pool.par_iter().copied().filter(consistent).collect()
    } else {
        pool.iter().copied().filter(consistent).collect()
    }
}

/// The set of words consistent with all observations applied so far
///
/// Starts as the full universe of the active mode and only ever shrinks until
/// [`reset`](Self::reset) is called.
#[derive(Debug, Clone)]
pub struct PossibilityPool<'a> {
    universe: &'a [Word],
    words: Vec<&'a Word>,
    index: FxHashSet<&'a Word>,
}

impl<'a> PossibilityPool<'a> {
    #[must_use]
    pub fn new(universe: &'a [Word]) -> Self {
        let words: Vec<&'a Word> = universe.iter().collect();
        let index = words.iter().copied().collect();
        Self {
            universe,
            words,
            index,
        }
    }

    /// Narrow the pool with one observation, returning the new size
    pub fn apply(&mut self, guess: &Word, pattern: Pattern) -> usize {
        let before = self.words.len();
        self.words = narrow(&self.words, guess, pattern);
        self.index = self.words.iter().copied().collect();
        debug!(
            "narrowed pool with {guess}:{pattern}: {before} -> {}",
            self.words.len()
        );
        self.words.len()
    }

    /// Restore the initial full contents
    pub fn reset(&mut self) {
        self.words = self.universe.iter().collect();
        self.index = self.words.iter().copied().collect();
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the pool before any observation
    #[inline]
    #[must_use]
    pub fn initial_len(&self) -> usize {
        self.universe.len()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }
}
