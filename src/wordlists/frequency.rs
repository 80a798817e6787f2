//! Solution pool with popularity scores
//!
//! Reads the `word,frequency` CSV produced by the `freq` command. Raw counts are
//! normalized into [0, 1] by dividing by the largest count.

use crate::core::Word;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrequencyError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: expected 'word,frequency', got '{text}'")]
    BadLine { line: usize, text: String },
    #[error("line {line}: malformed frequency '{value}'")]
    BadValue { line: usize, value: String },
}

/// Curated solution words, each with a popularity score in [0, 1]
///
/// Entries are kept most popular first.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(Word, f64)>,
    scores: FxHashMap<String, f64>,
}

impl FrequencyTable {
    /// Build a table from raw `(word, value)` pairs
    ///
    /// If any value exceeds 1 all values are divided by the maximum; negative
    /// values clamp to 0. Later duplicates of a word are ignored.
    pub fn from_counts(counts: impl IntoIterator<Item = (Word, f64)>) -> Self {
        let mut entries: Vec<(Word, f64)> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for (word, value) in counts {
            if seen.insert(word.text().to_string()) {
                entries.push((word, value.max(0.0)));
            }
        }

        let max = entries.iter().map(|&(_, v)| v).fold(0.0, f64::max);
        if max > 1.0 {
            for (_, value) in &mut entries {
                *value /= max;
            }
        }

        entries.sort_by(|(w1, v1), (w2, v2)| v2.total_cmp(v1).then_with(|| w1.cmp(w2)));

        let scores = entries
            .iter()
            .map(|(word, value)| (word.text().to_string(), *value))
            .collect();

        Self { entries, scores }
    }

    /// Parse CSV content
    ///
    /// A leading `word,...` header and blank lines are skipped. Rows whose word is
    /// not five letters are skipped.
    ///
    /// # Errors
    /// Returns `FrequencyError` for rows without a comma or with a non-numeric
    /// frequency.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::wordlists::FrequencyTable;
    ///
    /// let table = FrequencyTable::parse("word,frequency\nabout,200\nslate,50\n").unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert!((table.score(&Word::new("slate").unwrap()) - 0.25).abs() < 1e-12);
    /// ```
    pub fn parse(content: &str) -> Result<Self, FrequencyError> {
        let mut counts = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = idx + 1;
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }

            let (word, value) = text.split_once(',').ok_or_else(|| FrequencyError::BadLine {
                line,
                text: text.to_string(),
            })?;

            if line == 1 && word.trim().eq_ignore_ascii_case("word") {
                continue;
            }

            let value = value.trim();
            let value: f64 = value.parse().map_err(|_| FrequencyError::BadValue {
                line,
                value: value.to_string(),
            })?;

            match Word::new(word.trim()) {
                Ok(word) => counts.push((word, value)),
                Err(e) => debug!("skipping frequency row {line} ('{}'): {e}", word.trim()),
            }
        }

        Ok(Self::from_counts(counts))
    }

    /// Load a table from a CSV file
    ///
    /// # Errors
    /// Returns `FrequencyError` if the file cannot be read or is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FrequencyError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Popularity of `word`, 0 if the word is not in the table
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        self.scores.get(word.text()).copied().unwrap_or(0.0)
    }

    /// Solution words, most popular first
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|(word, _)| word)
    }

    #[must_use]
    pub fn entries(&self) -> &[(Word, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
