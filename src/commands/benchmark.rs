//! Benchmark command
//!
//! Plays a game against each of a set of target words and reports how many
//! guesses the recommendations needed.

use crate::core::{Observation, Word};
use crate::error::SolverError;
use crate::solver::Session;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Games give up after this many guesses
pub const MAX_GUESSES: usize = 6;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Games not solved within [`MAX_GUESSES`]
    pub failures: Vec<String>,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` targets from the session's universe
///
/// The first `count` words in order, or a random sample when `random` is set.
#[must_use]
pub fn select_targets<'a>(session: &Session<'a>, count: usize, random: bool) -> Vec<&'a Word> {
    let universe = session.pool().words();
    if random {
        universe
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect()
    } else {
        universe.iter().take(count).copied().collect()
    }
}

/// Run benchmark on a set of target words
///
/// The session is reset before every game and left reset afterwards. The opening
/// recommendation is computed once and reused for every game.
///
/// # Errors
///
/// Returns an error if a recommendation fails, which can only happen when a
/// target is outside the session's universe.
pub fn run_benchmark(
    session: &mut Session<'_>,
    target_words: &[&Word],
    progress: bool,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failures = Vec::new();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    let pb = if progress {
        let pb = ProgressBar::new(target_words.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    session.reset();
    let opening = session.recommend()?.best().cloned();

    for &target in target_words {
        session.reset();
        pb.set_message(target.text().to_uppercase());

        let mut guesses = 0;
        let mut solved = false;

        while guesses < MAX_GUESSES {
            let guess = match (guesses, &opening) {
                (0, Some(first)) => first.clone(),
                _ => match session.recommend()?.best() {
                    Some(word) => word.clone(),
                    None => break,
                },
            };
            guesses += 1;

            let observation = Observation::against(guess, target);
            solved = observation.pattern.is_perfect();
            session.apply(observation)?;

            if solved {
                break;
            }
        }

        debug!("{target}: {guesses} guesses, solved={solved}");
        if !solved {
            failures.push(target.text().to_string());
        }

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
        pb.inc(1);
    }

    pb.finish_and_clear();
    session.reset();

    let duration = start.elapsed();
    let total_words = target_words.len();

    Ok(BenchmarkResult {
        total_words,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        failures,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
