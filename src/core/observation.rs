//! A single piece of feedback: the word that was guessed and the pattern it got

use super::{Pattern, Word};
use crate::error::SolverError;
use std::fmt;

/// A `(guess, pattern)` pair as reported by the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guess: Word,
    pub pattern: Pattern,
}

impl Observation {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Parse an observation from user-supplied guess and pattern text
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `SolverError::MalformedObservation` if the guess is not five letters
    /// or the pattern is not five legal feedback symbols.
    pub fn parse(guess: &str, pattern: &str) -> Result<Self, SolverError> {
        let guess = Word::new(guess.trim())
            .map_err(|e| SolverError::MalformedObservation(format!("guess '{}': {e}", guess.trim())))?;
        let pattern = pattern.trim().parse::<Pattern>()?;
        Ok(Self { guess, pattern })
    }

    /// Parse the batch form `guess:pattern`, e.g. `crane:xygxg`
    ///
    /// # Errors
    /// Returns `SolverError::MalformedObservation` if the separator is missing or
    /// either half is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Observation;
    ///
    /// let obs = Observation::parse_pair("crane:xygxg").unwrap();
    /// assert_eq!(obs.guess.text(), "crane");
    /// assert_eq!(obs.pattern.to_string(), "xygxg");
    /// assert!(Observation::parse_pair("crane").is_err());
    /// ```
    pub fn parse_pair(text: &str) -> Result<Self, SolverError> {
        let (guess, pattern) = text.split_once(':').ok_or_else(|| {
            SolverError::MalformedObservation(format!("'{text}' is not in guess:pattern form"))
        })?;
        Self::parse(guess, pattern)
    }

    /// The observation the game would report if `answer` were the target
    #[must_use]
    pub fn against(guess: Word, answer: &Word) -> Self {
        let pattern = Pattern::calculate(&guess, answer);
        Self { guess, pattern }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}
