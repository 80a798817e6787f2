//! Word solving command
//!
//! Plays a game against a known target, always taking the top recommendation.

use crate::core::{Observation, Pattern, Word};
use crate::error::SolverError;
use crate::solver::Session;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` by self-play, starting from a fresh session state
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not in the session's pool, so it could never be found
pub fn solve_word(config: SolveConfig, session: &mut Session<'_>) -> Result<SolveResult, SolverError> {
    let target = Word::new(config.target.trim())?;
    session.reset();

    if !session.pool().contains(&target) {
        return Err(SolverError::UnknownWord(target.text().to_string()));
    }

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.pool().len();

        let recommendation = session.recommend()?;
        let Some(guess) = recommendation.best() else {
            break;
        };

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = session.metrics(guess);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let observation = Observation::against(guess.clone(), &target);
        let pattern = observation.pattern;
        let candidates_after = session.apply(observation)?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}
