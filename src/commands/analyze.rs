//! Word analysis command
//!
//! Scores a single guess against the session's current pool.

use crate::error::SolverError;
use crate::solver::{Mode, Session};

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    pub is_possible_answer: bool,
    /// Popularity score, bot mode only
    pub frequency: Option<f64>,
}

/// Analyze one word against the session's pool
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - Strict vocabulary checking is on and the word is not a legal guess
pub fn analyze_word(word: &str, session: &Session<'_>) -> Result<AnalysisResult, SolverError> {
    let guess = session.validate_guess(word)?;
    let metrics = session.metrics(&guess);

    let frequency = match session.mode() {
        Mode::Entropy => None,
        Mode::Bot => Some(session.lexicon().frequencies().score(&guess)),
    };

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        total_candidates: session.pool().len(),
        is_possible_answer: session.pool().contains(&guess),
        frequency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{FrequencyTable, Lexicon};

    fn lexicon() -> Lexicon {
        Lexicon::from_words(words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "tonus", "stone", "notes",
        ]))
    }

    #[test]
    fn analyze_valid_word() {
        let lexicon = lexicon();
        let session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let result = analyze_word("CRANE", &session).unwrap();

        assert_eq!(result.word, "crane");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 8);
        assert!(result.is_possible_answer);
        assert!(result.frequency.is_none());
    }

    #[test]
    fn analyze_invalid_word() {
        let lexicon = lexicon();
        let session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        assert!(matches!(
            analyze_word("cranes", &session),
            Err(SolverError::MalformedObservation(_))
        ));
    }

    #[test]
    fn entropy_properties() {
        let lexicon = lexicon();
        let session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let result = analyze_word("zzzzz", &session).unwrap();
        assert!(result.entropy.abs() < f64::EPSILON);
        assert!((result.expected_remaining - 8.0).abs() < 1e-12);
        assert!(!result.is_possible_answer);

        let result = analyze_word("slate", &session).unwrap();
        assert!(result.entropy <= (8.0_f64).log2());
        assert!(result.expected_remaining <= 8.0);
    }

    #[test]
    fn bot_mode_reports_frequency() {
        let table = FrequencyTable::parse("word,frequency\ncrate,10\ngrate,5\n").unwrap();
        let lexicon = Lexicon::new(words_from_slice(&["crane", "slate"]), Some(table));
        let config = SessionConfig {
            mode: Mode::Bot,
            ..SessionConfig::default()
        };
        let session = Session::new(&lexicon, config).unwrap();

        let result = analyze_word("grate", &session).unwrap();
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.frequency, Some(0.5));
    }
}
