//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and a pool, partitions the pool by feedback pattern and derives
//! the expected information gain and expected remaining pool size from the same
//! single pass.

use crate::core::{PATTERN_COUNT, Pattern, Word};

/// Metrics for evaluating a guess against a pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
}

/// Count how many pool words fall into each feedback pattern for `guess`
///
/// Indexed by [`Pattern::index`].
#[must_use]
pub fn partition_counts(guess: &Word, pool: &[&Word]) -> [u32; PATTERN_COUNT] {
    let mut counts = [0u32; PATTERN_COUNT];

    for &answer in pool {
        counts[Pattern::calculate(guess, answer).index()] += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern counts
///
/// H = -Σ p * log₂(p), computed as Σ p * log₂(1/p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_advisor::solver::entropy::shannon_entropy;
///
/// let uniform = [25, 25, 25, 25];
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 1e-12); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = f64::from(total);
    counts
        .iter()
        .filter(|&&count| count > 0)
        .fold(0.0, |acc, &count| {
            let count = f64::from(count);
            acc + (count / total) * (total / count).log2()
        })
}

/// Expected pool size after the guess, Σ c² / n
///
/// Assumes the answer is uniformly likely among the pool.
#[must_use]
pub fn expected_remaining(counts: &[u32]) -> f64 {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let sum_squares: f64 = counts
        .iter()
        .map(|&count| {
            let count = f64::from(count);
            count * count
        })
        .sum();
    sum_squares / f64::from(total)
}

/// Calculate Shannon entropy for a guess against a pool
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let pool = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
/// let pool_refs: Vec<&Word> = pool.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &pool_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, pool: &[&Word]) -> f64 {
    calculate_metrics(guess, pool).entropy
}

/// Calculate entropy and expected remaining for a guess in one pass
///
/// Pools of size 0 or 1 carry no information: entropy is 0 and the expected
/// remaining equals the pool size.
#[must_use]
pub fn calculate_metrics(guess: &Word, pool: &[&Word]) -> GuessMetrics {
    if pool.len() <= 1 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: pool.len() as f64,
        };
    }

    let counts = partition_counts(guess, pool);

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining: expected_remaining(&counts),
    }
}
