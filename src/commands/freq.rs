//! Frequency cross-reference command
//!
//! Joins the official solutions list with a `word<TAB>count` corpus and writes
//! the `word,frequency` CSV that bot mode loads.

use crate::core::Word;
use anyhow::{Context, Result};
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Count given to solutions the corpus does not know
pub const DEFAULT_COUNT: u64 = 1;

/// How many missing words the report keeps
const MISSING_SAMPLE: usize = 20;

/// Summary of a cross-reference run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqStats {
    pub total_solutions: usize,
    pub found: usize,
    pub not_found: usize,
    /// The first few solutions missing from the corpus
    pub missing_sample: Vec<String>,
    pub most_common: Option<(String, u64)>,
    pub least_common: Option<(String, u64)>,
}

impl FreqStats {
    /// Share of solutions found in the corpus, in percent
    #[must_use]
    pub fn found_percent(&self) -> f64 {
        if self.total_solutions == 0 {
            0.0
        } else {
            100.0 * self.found as f64 / self.total_solutions as f64
        }
    }
}

/// Parse a solutions list, keeping file order
#[must_use]
pub fn parse_solutions(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Parse a `word<TAB>count` corpus
///
/// Lines without a tab or with a non-integer count are skipped. Later entries
/// for the same word win.
#[must_use]
pub fn parse_corpus(content: &str) -> FxHashMap<String, u64> {
    let mut counts = FxHashMap::default();
    for line in content.lines() {
        let mut parts = line.trim().split('\t');
        let (Some(word), Some(count)) = (parts.next(), parts.next()) else {
            continue;
        };
        match count.trim().parse::<u64>() {
            Ok(count) => {
                counts.insert(word.to_lowercase(), count);
            }
            Err(_) => debug!("skipping corpus line '{line}'"),
        }
    }
    counts
}

/// Attach a corpus count to every solution, most common first
///
/// Solutions the corpus lacks get [`DEFAULT_COUNT`]. Equal counts keep
/// solutions-list order.
#[must_use]
pub fn cross_reference(
    solutions: &[Word],
    corpus: &FxHashMap<String, u64>,
) -> (Vec<(String, u64)>, FreqStats) {
    let mut rows = Vec::with_capacity(solutions.len());
    let mut missing = Vec::new();

    for word in solutions {
        if let Some(&count) = corpus.get(word.text()) {
            rows.push((word.text().to_string(), count));
        } else {
            rows.push((word.text().to_string(), DEFAULT_COUNT));
            missing.push(word.text().to_string());
        }
    }

    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let stats = FreqStats {
        total_solutions: solutions.len(),
        found: solutions.len() - missing.len(),
        not_found: missing.len(),
        missing_sample: missing.into_iter().take(MISSING_SAMPLE).collect(),
        most_common: rows.first().cloned(),
        least_common: rows.last().cloned(),
    };

    (rows, stats)
}

/// Write rows as `word,frequency` CSV with a header line
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_csv<W: Write>(rows: &[(String, u64)], mut out: W) -> std::io::Result<()> {
    writeln!(out, "word,frequency")?;
    for (word, count) in rows {
        writeln!(out, "{word},{count}")?;
    }
    out.flush()
}

/// Read both inputs, cross-reference them and write `output`
///
/// # Errors
/// Returns an error if an input cannot be read or the output cannot be written.
pub fn run_freq(solutions: &Path, corpus: &Path, output: &Path) -> Result<FreqStats> {
    let solution_words = parse_solutions(
        &fs::read_to_string(solutions)
            .with_context(|| format!("reading solutions file {}", solutions.display()))?,
    );
    info!("loaded {} solution words", solution_words.len());

    let counts = parse_corpus(
        &fs::read_to_string(corpus)
            .with_context(|| format!("reading frequency file {}", corpus.display()))?,
    );
    info!("loaded {} word frequencies", counts.len());

    let (rows, stats) = cross_reference(&solution_words, &counts);

    let file = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    write_csv(&rows, BufWriter::new(file))
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(stats)
}
