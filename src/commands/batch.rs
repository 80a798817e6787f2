//! Batch command
//!
//! Applies a list of `guess:pattern` observations non-interactively and reports
//! what is left.

use crate::core::{Observation, Word};
use crate::error::SolverError;
use crate::solver::{Recommendation, Session};

/// Pool size after one batch observation
pub struct BatchStep {
    pub observation: Observation,
    pub remaining: usize,
}

/// Where the batch ended up
pub enum BatchOutcome<'a> {
    /// Exactly one word is consistent with the feedback
    Solved(&'a Word),
    /// Several words remain; the best guesses from here
    Recommend(Recommendation<'a>),
    /// The feedback is contradictory
    NoCandidates,
}

pub struct BatchReport<'a> {
    pub steps: Vec<BatchStep>,
    pub outcome: BatchOutcome<'a>,
}

/// Apply every `guess:pattern` argument in order
///
/// Processing stops at the first observation that leaves no candidates.
///
/// # Errors
///
/// Returns `MalformedObservation` for an argument that does not parse (nothing
/// after it is applied), or `UnknownWord` under strict vocabulary checking.
pub fn run_batch<'a>(
    session: &mut Session<'a>,
    pairs: &[String],
) -> Result<BatchReport<'a>, SolverError> {
    let observations = pairs
        .iter()
        .map(|pair| Observation::parse_pair(pair))
        .collect::<Result<Vec<_>, _>>()?;

    let mut steps = Vec::with_capacity(observations.len());

    for observation in observations {
        match session.apply(observation.clone()) {
            Ok(remaining) => steps.push(BatchStep {
                observation,
                remaining,
            }),
            Err(SolverError::EmptyPool { .. }) => {
                steps.push(BatchStep {
                    observation,
                    remaining: 0,
                });
                return Ok(BatchReport {
                    steps,
                    outcome: BatchOutcome::NoCandidates,
                });
            }
            Err(e) => return Err(e),
        }
    }

    let outcome = match session.solution() {
        Some(answer) => BatchOutcome::Solved(answer),
        None => BatchOutcome::Recommend(session.recommend()?),
    };

    Ok(BatchReport { steps, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(words_from_slice(&[
            "crane", "slate", "tonus", "bonus", "stone", "nutso", "snout",
        ]))
    }

    fn args(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn batch_reports_each_step() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let report = run_batch(&mut session, &args(&["crane:xxxyx"])).unwrap();

        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.steps[0].remaining, 4);
        match report.outcome {
            BatchOutcome::Recommend(rec) => {
                assert_eq!(rec.pool_size, 4);
                assert!(!rec.top.is_empty());
            }
            _ => panic!("expected recommendations"),
        }
    }

    #[test]
    fn batch_finds_single_answer() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let report = run_batch(&mut session, &args(&["crane:xxxyx", "bonus:xgggg"])).unwrap();

        match report.outcome {
            BatchOutcome::Solved(word) => assert_eq!(word.text(), "tonus"),
            _ => panic!("expected a single answer"),
        }
    }

    #[test]
    fn batch_stops_on_contradiction() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let report = run_batch(&mut session, &args(&["zzzzz:ggggg", "crane:xxxxx"])).unwrap();

        assert_eq!(report.steps.len(), 1);
        assert!(matches!(report.outcome, BatchOutcome::NoCandidates));
    }

    #[test]
    fn batch_rejects_malformed_pairs_before_applying() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let result = run_batch(&mut session, &args(&["crane:xxxyx", "slate"]));

        assert!(matches!(result, Err(SolverError::MalformedObservation(_))));
        assert!(session.history().is_empty());
    }
}
