//! Expected-remaining calculation for bot mode
//!
//! Same partition as the entropy calculator, but the pool is the curated
//! solution pool and the metric kept is the expected post-feedback pool size.

use crate::core::Word;
use crate::solver::entropy::{expected_remaining, partition_counts};
use crate::wordlists::FrequencyTable;

/// Expected size of `solution_pool` after guessing `guess`
///
/// Pools of size 0 or 1 return the pool size.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::expected::calculate_expected_remaining;
///
/// let guess = Word::new("slate").unwrap();
/// let pool = vec![Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];
/// let pool_refs: Vec<&Word> = pool.iter().collect();
///
/// assert!((calculate_expected_remaining(&guess, &pool_refs) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn calculate_expected_remaining(guess: &Word, solution_pool: &[&Word]) -> f64 {
    if solution_pool.len() <= 1 {
        return solution_pool.len() as f64;
    }

    expected_remaining(&partition_counts(guess, solution_pool))
}

/// Bot-mode score: `(expected_remaining, frequency_score)`
///
/// The frequency score is looked up for `guess` and is 0 for words missing
/// from the table.
#[must_use]
pub fn score_bot(guess: &Word, solution_pool: &[&Word], frequencies: &FrequencyTable) -> (f64, f64) {
    (
        calculate_expected_remaining(guess, solution_pool),
        frequencies.score(guess),
    )
}
