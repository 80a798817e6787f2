//! Recommendation ranking
//!
//! Runs a scorer over every candidate guess on the rayon pool, then sorts in the
//! calling thread by the scorer's order with the word itself as the last key.

use super::scorer::{ScoredCandidate, Scorer};
use crate::core::Word;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::time::Instant;

/// Full preference order: the scorer's order, then lexicographic on the word
pub fn compare<S: Scorer + ?Sized>(
    scorer: &S,
    a: &ScoredCandidate<'_>,
    b: &ScoredCandidate<'_>,
) -> Ordering {
    scorer.compare(a, b).then_with(|| a.word.cmp(b.word))
}

/// Score every candidate against `pool` and return them best first
///
/// `pool` is read-only for the whole computation; each candidate is scored
/// independently.
pub fn score_candidates<'a, S: Scorer + ?Sized>(
    scorer: &S,
    candidates: &[&'a Word],
    pool: &[&Word],
) -> Vec<ScoredCandidate<'a>> {
    let start = Instant::now();
    let members: FxHashSet<&str> = pool.iter().map(|w| w.text()).collect();

    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .par_iter()
        .map(|&word| {
            let score = scorer.score(word, pool);
            ScoredCandidate {
                word,
                primary: score.primary,
                secondary: score.secondary,
                is_possible_answer: members.contains(word.text()),
            }
        })
        .collect();

    scored.sort_by(|a, b| compare(scorer, a, b));

    debug!(
        "scored {} candidates against {} pool words in {:.3}s",
        candidates.len(),
        pool.len(),
        start.elapsed().as_secs_f64()
    );

    scored
}

/// Rank `candidates` against `pool` and keep the best `top_n`
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::EntropyScorer;
/// use wordle_advisor::solver::ranker::rank;
///
/// let words: Vec<Word> = ["aaaaa", "aeros", "slate", "irate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
/// let pool: Vec<&Word> = words[2..].iter().collect();
///
/// let ranked = rank(&EntropyScorer::new(&words), &candidates, &pool, 2);
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked[0].primary >= ranked[1].primary);
/// ```
pub fn rank<'a, S: Scorer + ?Sized>(
    scorer: &S,
    candidates: &[&'a Word],
    pool: &[&Word],
    top_n: usize,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored = score_candidates(scorer, candidates, pool);
    scored.truncate(top_n);
    scored
}

/// The best `n` entries of a ranked list that are themselves possible answers
///
/// This is a view over an existing ranking, not a new computation.
#[must_use]
pub fn best_possible_answers<'a>(
    ranked: &[ScoredCandidate<'a>],
    n: usize,
) -> Vec<ScoredCandidate<'a>> {
    ranked
        .iter()
        .filter(|c| c.is_possible_answer)
        .take(n)
        .copied()
        .collect()
}
