//! Entropy-based scoring
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions.
//! This is the foundation of the default ranking mode.

mod calculator;
mod scorer;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, expected_remaining, partition_counts,
    shannon_entropy,
};
pub use scorer::EntropyScorer;
