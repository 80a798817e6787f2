//! Entropy-mode scorer
//!
//! Ranks guesses by expected information gain. Ties fall to possible answers,
//! then lower expected remaining, then the letter-frequency score of the word.

use super::calculator::calculate_metrics;
use crate::core::{ALPHABET, Word};
use crate::solver::scorer::{Score, ScoredCandidate, Scorer, quantize};
use std::cmp::Ordering;

/// Entropy maximization scorer
pub struct EntropyScorer {
    letter_weights: [f64; ALPHABET],
}

impl EntropyScorer {
    /// Build the scorer, computing letter frequencies over `vocabulary`
    ///
    /// Each letter counts once per word; weights sum to 1.
    #[must_use]
    pub fn new(vocabulary: &[Word]) -> Self {
        let mut counts = [0u32; ALPHABET];
        for word in vocabulary {
            for letter in word.distinct_letters() {
                counts[usize::from(letter - b'a')] += 1;
            }
        }

        let total: u32 = counts.iter().sum();
        let mut letter_weights = [0.0; ALPHABET];
        if total > 0 {
            for (weight, &count) in letter_weights.iter_mut().zip(&counts) {
                *weight = f64::from(count) / f64::from(total);
            }
        }

        Self { letter_weights }
    }

    /// Sum of the weights of the word's distinct letters
    #[must_use]
    pub fn letter_score(&self, word: &Word) -> f64 {
        word.distinct_letters()
            .map(|letter| self.letter_weights[usize::from(letter - b'a')])
            .sum()
    }
}

impl Scorer for EntropyScorer {
    fn score(&self, guess: &Word, pool: &[&Word]) -> Score {
        let metrics = calculate_metrics(guess, pool);
        Score {
            primary: metrics.entropy,
            secondary: metrics.expected_remaining,
        }
    }

    fn compare(&self, a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
        quantize(b.primary)
            .cmp(&quantize(a.primary))
            .then(b.is_possible_answer.cmp(&a.is_possible_answer))
            .then(quantize(a.secondary).cmp(&quantize(b.secondary)))
            .then_with(|| {
                self.letter_score(b.word)
                    .total_cmp(&self.letter_score(a.word))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn candidate(word: &Word, primary: f64, secondary: f64, possible: bool) -> ScoredCandidate<'_> {
        ScoredCandidate {
            word,
            primary,
            secondary,
            is_possible_answer: possible,
        }
    }

    #[test]
    fn letter_weights_sum_to_one() {
        let words = words_from_slice(&["crane", "slate", "eerie"]);
        let scorer = EntropyScorer::new(&words);
        let total: f64 = scorer.letter_weights.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn letter_score_counts_distinct_letters_once() {
        let words = words_from_slice(&["aaaaa", "abbbb"]);
        let scorer = EntropyScorer::new(&words);
        // a appears in 2 words, b in 1 → a = 2/3, b = 1/3
        let a = Word::new("aaaaa").unwrap();
        let ab = Word::new("abbbb").unwrap();
        assert!((scorer.letter_score(&a) - 2.0 / 3.0).abs() < 1e-12);
        assert!((scorer.letter_score(&ab) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_vocabulary_has_zero_weights() {
        let scorer = EntropyScorer::new(&[]);
        let word = Word::new("crane").unwrap();
        assert!(scorer.letter_score(&word).abs() < f64::EPSILON);
    }

    #[test]
    fn higher_entropy_wins() {
        let scorer = EntropyScorer::new(&[]);
        let w1 = Word::new("aaaaa").unwrap();
        let w2 = Word::new("bbbbb").unwrap();

        let better = candidate(&w1, 2.0, 5.0, false);
        let worse = candidate(&w2, 1.5, 1.0, true);
        assert_eq!(scorer.compare(&better, &worse), Ordering::Less);
        assert_eq!(scorer.compare(&worse, &better), Ordering::Greater);
    }

    #[test]
    fn ties_prefer_possible_answers_then_lower_expected() {
        let scorer = EntropyScorer::new(&[]);
        let w1 = Word::new("aaaaa").unwrap();
        let w2 = Word::new("bbbbb").unwrap();

        let possible = candidate(&w1, 2.0, 3.0, true);
        let strategic = candidate(&w2, 2.0, 1.0, false);
        assert_eq!(scorer.compare(&possible, &strategic), Ordering::Less);

        let low = candidate(&w1, 2.0, 1.0, false);
        let high = candidate(&w2, 2.0, 3.0, false);
        assert_eq!(scorer.compare(&low, &high), Ordering::Less);
    }

    #[test]
    fn letter_score_breaks_remaining_ties() {
        let words = words_from_slice(&["eeeee", "eaaaa", "zzzzz"]);
        let scorer = EntropyScorer::new(&words);
        let common = Word::new("eeeee").unwrap();
        let rare = Word::new("zzzzz").unwrap();

        let a = candidate(&common, 1.0, 2.0, false);
        let b = candidate(&rare, 1.0, 2.0, false);
        assert_eq!(scorer.compare(&a, &b), Ordering::Less);
    }
}
