//! Error taxonomy for the solving engine

use crate::core::WordError;
use thiserror::Error;

/// Errors surfaced by the engine
///
/// All variants are recoverable: the caller can re-prompt, undo or reset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Guess or pattern has the wrong length or illegal characters.
    /// The observation was not applied.
    #[error("malformed observation: {0}")]
    MalformedObservation(String),

    /// No candidate is consistent with the feedback received so far.
    #[error("no candidates remain after {guess}:{pattern}; the feedback is inconsistent")]
    EmptyPool { guess: String, pattern: String },

    /// The guess is not part of the active vocabulary.
    #[error("'{0}' is not in the guess vocabulary")]
    UnknownWord(String),

    /// Bot mode was requested without a solution/frequency table.
    #[error("bot mode needs a solution frequency table (use --solutions)")]
    MissingSolutionPool,
}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::MalformedObservation(err.to_string())
    }
}
