//! A solving session: one possibility pool, one scorer, and the feedback history
//!
//! The session borrows its vocabularies from a [`Lexicon`] and owns the only
//! mutable state. Ranking takes `&self` and applying feedback takes `&mut self`,
//! so the pool can never change under a ranking in progress.

use super::entropy::{EntropyScorer, GuessMetrics, calculate_metrics};
use super::expected::BotScorer;
use super::pool::PossibilityPool;
use super::ranker::{best_possible_answers, score_candidates};
use super::scorer::{Mode, Score, ScoredCandidate, Scorer, ScorerKind};
use crate::core::{Observation, Word};
use crate::error::SolverError;
use crate::wordlists::Lexicon;
use log::{info, warn};

/// Pools this small are solved by guessing one of their own words
const ENDGAME_POOL: usize = 2;

/// Knobs for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: Mode,
    /// Only suggest words that could still be the answer
    pub hard_mode: bool,
    /// Length of the recommendation list
    pub top_n: usize,
    /// Length of the possible-answers view
    pub answer_view: usize,
    /// Reject guesses outside the guess vocabulary
    pub strict_vocabulary: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Entropy,
            hard_mode: false,
            top_n: 10,
            answer_view: 5,
            strict_vocabulary: false,
        }
    }
}

/// Result of a ranking request
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    /// Best guesses, best first
    pub top: Vec<ScoredCandidate<'a>>,
    /// Best guesses that could also be the answer, taken from the same ranking
    pub possible_answers: Vec<ScoredCandidate<'a>>,
    pub pool_size: usize,
}

impl<'a> Recommendation<'a> {
    /// The single best guess, if any
    #[must_use]
    pub fn best(&self) -> Option<&'a Word> {
        self.top.first().map(|c| c.word)
    }
}

/// One game in progress
pub struct Session<'a> {
    config: SessionConfig,
    lexicon: &'a Lexicon,
    scorer: ScorerKind<'a>,
    pool: PossibilityPool<'a>,
    history: Vec<Observation>,
}

impl<'a> Session<'a> {
    /// Start a session over `lexicon`
    ///
    /// Entropy mode reasons over the guess vocabulary; bot mode over the
    /// solution pool.
    ///
    /// # Errors
    /// Returns `SolverError::MissingSolutionPool` in bot mode when the lexicon
    /// has no solution words.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::solver::{Session, SessionConfig};
    /// use wordle_advisor::wordlists::Lexicon;
    /// use wordle_advisor::wordlists::loader::words_from_slice;
    ///
    /// let lexicon = Lexicon::from_words(words_from_slice(&["crane", "tonus", "slate", "stone"]));
    /// let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();
    ///
    /// let left = session.apply_str("crane", "xxxyx").unwrap();
    /// assert_eq!(left, session.pool().len());
    /// assert!(session.recommend().unwrap().top.iter().any(|c| c.word.text() == "tonus"));
    /// ```
    pub fn new(lexicon: &'a Lexicon, config: SessionConfig) -> Result<Self, SolverError> {
        let (scorer, universe) = match config.mode {
            Mode::Entropy => (
                ScorerKind::Entropy(EntropyScorer::new(lexicon.guess_words())),
                lexicon.guess_words(),
            ),
            Mode::Bot => {
                if !lexicon.has_solutions() {
                    return Err(SolverError::MissingSolutionPool);
                }
                (
                    ScorerKind::Bot(BotScorer::new(lexicon.frequencies())),
                    lexicon.solutions(),
                )
            }
        };

        info!(
            "{} session over {} words ({} guesses{})",
            config.mode.name(),
            universe.len(),
            lexicon.guess_words().len(),
            if config.hard_mode { ", hard mode" } else { "" }
        );

        Ok(Self {
            config,
            lexicon,
            scorer,
            pool: PossibilityPool::new(universe),
            history: Vec::new(),
        })
    }

    /// Parse a typed guess
    ///
    /// # Errors
    /// `MalformedObservation` if it is not five letters; `UnknownWord` if strict
    /// vocabulary checking is on and the word is not a legal guess.
    pub fn validate_guess(&self, text: &str) -> Result<Word, SolverError> {
        let word = Word::new(text.trim())?;
        if self.config.strict_vocabulary && !self.lexicon.contains(word.text()) {
            return Err(SolverError::UnknownWord(word.text().to_string()));
        }
        Ok(word)
    }

    /// Narrow the pool with one observation, returning the new pool size
    ///
    /// # Errors
    /// `UnknownWord` under strict vocabulary checking, in which case nothing is
    /// applied. `EmptyPool` if no word is consistent with the feedback: the pool
    /// is left empty and the observation stays in the history so it can be
    /// undone.
    pub fn apply(&mut self, observation: Observation) -> Result<usize, SolverError> {
        if self.config.strict_vocabulary && !self.lexicon.contains(observation.guess.text()) {
            return Err(SolverError::UnknownWord(
                observation.guess.text().to_string(),
            ));
        }

        let remaining = self.pool.apply(&observation.guess, observation.pattern);
        let error = (remaining == 0).then(|| Self::empty_pool(&observation));
        self.history.push(observation);

        match error {
            Some(err) => {
                warn!("{err}");
                Err(err)
            }
            None => Ok(remaining),
        }
    }

    /// Parse and apply `guess` with `pattern`
    ///
    /// # Errors
    /// `MalformedObservation` if either string is malformed (the pool is
    /// untouched), otherwise as [`apply`](Self::apply).
    pub fn apply_str(&mut self, guess: &str, pattern: &str) -> Result<usize, SolverError> {
        let observation = Observation::parse(guess, pattern)?;
        self.apply(observation)
    }

    /// Drop the last observation and rebuild the pool from the rest
    pub fn undo(&mut self) -> Option<Observation> {
        let last = self.history.pop()?;
        self.pool.reset();
        for obs in &self.history {
            self.pool.apply(&obs.guess, obs.pattern);
        }
        info!("undid {last}, {} words possible", self.pool.len());
        Some(last)
    }

    /// Forget every observation
    pub fn reset(&mut self) {
        self.pool.reset();
        self.history.clear();
        info!("session reset, {} words possible", self.pool.len());
    }

    /// The words a recommendation is chosen from
    ///
    /// Hard mode, and any pool of two words or fewer, restricts candidates to
    /// the pool itself.
    #[must_use]
    pub fn candidate_guesses(&self) -> Vec<&'a Word> {
        if self.config.hard_mode || self.pool.len() <= ENDGAME_POOL {
            self.pool.words().to_vec()
        } else {
            self.lexicon.guess_words().iter().collect()
        }
    }

    /// Rank candidates against the current pool
    ///
    /// # Errors
    /// `EmptyPool` if no word is consistent with the history.
    pub fn recommend(&self) -> Result<Recommendation<'a>, SolverError> {
        if self.pool.is_empty() {
            return Err(self.history.last().map_or_else(
                || SolverError::EmptyPool {
                    guess: "-".to_string(),
                    pattern: "-".to_string(),
                },
                Self::empty_pool,
            ));
        }

        let candidates = self.candidate_guesses();
        let mut ranked = score_candidates(&self.scorer, &candidates, self.pool.words());

        let possible_answers = best_possible_answers(&ranked, self.config.answer_view);
        ranked.truncate(self.config.top_n);

        Ok(Recommendation {
            top: ranked,
            possible_answers,
            pool_size: self.pool.len(),
        })
    }

    /// Score one guess with the active scorer
    #[must_use]
    pub fn score_guess(&self, guess: &Word) -> Score {
        self.scorer.score(guess, self.pool.words())
    }

    /// Entropy and expected remaining of `guess` against the pool
    #[must_use]
    pub fn metrics(&self, guess: &Word) -> GuessMetrics {
        calculate_metrics(guess, self.pool.words())
    }

    /// Every pool word scored against the pool, best first
    #[must_use]
    pub fn rank_pool(&self) -> Vec<ScoredCandidate<'a>> {
        score_candidates(&self.scorer, self.pool.words(), self.pool.words())
    }

    /// Up to `max` pool words in alphabetical order
    #[must_use]
    pub fn remaining(&self, max: usize) -> Vec<&'a Word> {
        let mut words = self.pool.words().to_vec();
        words.sort_unstable();
        words.truncate(max);
        words
    }

    /// The answer, once exactly one word is left
    #[must_use]
    pub fn solution(&self) -> Option<&'a Word> {
        match self.pool.words() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Whether the last observation was all hits
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|obs| obs.pattern.is_perfect())
    }

    /// Bits of information gained since the start of the game
    #[must_use]
    pub fn bits_gained(&self) -> f64 {
        let initial = self.pool.initial_len();
        let current = self.pool.len();
        if initial == 0 || current == 0 {
            return 0.0;
        }
        (initial as f64 / current as f64).log2()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &PossibilityPool<'a> {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.config.mode
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    fn empty_pool(observation: &Observation) -> SolverError {
        SolverError::EmptyPool {
            guess: observation.guess.text().to_string(),
            pattern: observation.pattern.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::wordlists::FrequencyTable;
    use crate::wordlists::loader::words_from_slice;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(words_from_slice(&[
            "crane", "tonus", "slate", "irate", "crate", "stone", "notes", "onset", "unset",
            "nutso", "bonus", "snout",
        ]))
    }

    #[test]
    fn apply_narrows_and_records_history() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();
        let before = session.pool().len();

        let left = session.apply_str("crane", "xxxyx").unwrap();

        assert!(left < before);
        assert_eq!(session.history().len(), 1);
        assert!(session.pool().words().iter().any(|w| w.text() == "tonus"));
        assert!(session.bits_gained() > 0.0);
    }

    #[test]
    fn malformed_input_leaves_pool_unchanged() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        assert!(matches!(
            session.apply_str("crane", "xxqxx"),
            Err(SolverError::MalformedObservation(_))
        ));
        assert!(matches!(
            session.apply_str("cranes", "xxxxx"),
            Err(SolverError::MalformedObservation(_))
        ));
        assert_eq!(session.pool().len(), lexicon.guess_words().len());
        assert!(session.history().is_empty());
    }

    #[test]
    fn contradictory_feedback_reports_empty_pool() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let err = session.apply_str("zzzzz", "ggggg").unwrap_err();
        assert_eq!(
            err,
            SolverError::EmptyPool {
                guess: "zzzzz".to_string(),
                pattern: "ggggg".to_string()
            }
        );
        assert!(session.pool().is_empty());
        assert!(matches!(session.recommend(), Err(SolverError::EmptyPool { .. })));

        session.undo();
        assert_eq!(session.pool().len(), lexicon.guess_words().len());
        assert!(session.recommend().is_ok());
    }

    #[test]
    fn undo_replays_remaining_history() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

        let tonus = Word::new("tonus").unwrap();
        let after_first = session.apply_str("crane", "xxxyx").unwrap();
        session
            .apply(Observation::against(Word::new("stone").unwrap(), &tonus))
            .unwrap();

        let undone = session.undo().unwrap();
        assert_eq!(undone.guess.text(), "stone");
        assert_eq!(session.pool().len(), after_first);

        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session.pool().len(), lexicon.guess_words().len());
        assert!(session.undo().is_none());
    }

    #[test]
    fn hard_mode_only_suggests_possible_answers() {
        let lexicon = lexicon();
        let config = SessionConfig {
            hard_mode: true,
            ..SessionConfig::default()
        };
        let mut session = Session::new(&lexicon, config).unwrap();
        session.apply_str("crane", "xxxyx").unwrap();

        let rec = session.recommend().unwrap();
        assert!(!rec.top.is_empty());
        assert!(rec.top.iter().all(|c| c.is_possible_answer));
        assert_eq!(rec.pool_size, session.pool().len());
    }

    #[test]
    fn endgame_restricts_candidates_to_pool() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();
        let tonus = Word::new("tonus").unwrap();
        let bonus = Word::new("bonus").unwrap();
        let pattern = Pattern::calculate(&bonus, &tonus);

        session.apply(Observation::new(bonus, pattern)).unwrap();
        assert!(session.pool().len() <= ENDGAME_POOL);
        assert!(
            session
                .candidate_guesses()
                .iter()
                .all(|w| session.pool().contains(w))
        );
    }

    #[test]
    fn strict_vocabulary_rejects_unknown_words() {
        let lexicon = lexicon();
        let config = SessionConfig {
            strict_vocabulary: true,
            ..SessionConfig::default()
        };
        let mut session = Session::new(&lexicon, config).unwrap();

        assert_eq!(
            session.validate_guess("qwert"),
            Err(SolverError::UnknownWord("qwert".to_string()))
        );
        assert!(session.validate_guess("Crane").is_ok());
        assert!(matches!(
            session.apply_str("qwert", "xxxxx"),
            Err(SolverError::UnknownWord(_))
        ));
        assert!(session.history().is_empty());
    }

    #[test]
    fn bot_mode_needs_solutions() {
        let lexicon = lexicon();
        let config = SessionConfig {
            mode: Mode::Bot,
            ..SessionConfig::default()
        };
        assert!(matches!(
            Session::new(&lexicon, config),
            Err(SolverError::MissingSolutionPool)
        ));
    }

    #[test]
    fn bot_mode_reasons_over_solutions() {
        let table = FrequencyTable::parse("word,frequency\ntonus,50\nbonus,80\nonset,20\n").unwrap();
        let lexicon = Lexicon::new(words_from_slice(&["crane", "slate", "stone"]), Some(table));
        let config = SessionConfig {
            mode: Mode::Bot,
            ..SessionConfig::default()
        };
        let session = Session::new(&lexicon, config).unwrap();

        assert_eq!(session.pool().len(), 3);
        let rec = session.recommend().unwrap();
        assert_eq!(rec.pool_size, 3);
        assert!(rec.top.windows(2).all(|w| w[0].primary <= w[1].primary + 1e-9));
        assert!(rec.possible_answers.iter().all(|c| c.is_possible_answer));
    }

    #[test]
    fn solution_and_remaining() {
        let lexicon = lexicon();
        let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();
        assert!(session.solution().is_none());
        assert_eq!(session.remaining(3).len(), 3);

        let answer = Word::new("crate").unwrap();
        let guess = Word::new("crate").unwrap();
        session.apply(Observation::against(guess, &answer)).unwrap();

        assert_eq!(session.solution().map(Word::text), Some("crate"));
        assert!(session.is_solved());
    }
}
