//! Word lists for Wordle solving
//!
//! Loads the guess vocabulary and the optional solution/frequency table, and
//! bundles them into a read-only [`Lexicon`] that sessions borrow.

mod embedded;
pub mod frequency;
pub mod loader;

pub use embedded::FALLBACK_WORDS;
pub use frequency::{FrequencyError, FrequencyTable};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The static data a session reasons over
///
/// Solutions, when present, are merged into the guess vocabulary so that any
/// answer can also be typed as a guess.
#[derive(Debug, Clone)]
pub struct Lexicon {
    guess_words: Vec<Word>,
    solutions: Vec<Word>,
    frequencies: FrequencyTable,
    index: FxHashSet<String>,
}

impl Lexicon {
    /// # Examples
    /// ```
    /// use wordle_advisor::wordlists::{FrequencyTable, Lexicon};
    /// use wordle_advisor::wordlists::loader::words_from_slice;
    ///
    /// let table = FrequencyTable::parse("word,frequency\ntonus,3\n").unwrap();
    /// let lexicon = Lexicon::new(words_from_slice(&["crane", "slate"]), Some(table));
    ///
    /// assert_eq!(lexicon.guess_words().len(), 3);
    /// assert_eq!(lexicon.solutions().len(), 1);
    /// assert!(lexicon.contains("tonus"));
    /// ```
    #[must_use]
    pub fn new(mut guess_words: Vec<Word>, frequencies: Option<FrequencyTable>) -> Self {
        let frequencies = frequencies.unwrap_or_default();

        let mut solutions: Vec<Word> = frequencies.words().cloned().collect();
        solutions.sort();

        guess_words.extend(solutions.iter().cloned());
        guess_words.sort();
        guess_words.dedup();

        let index = guess_words.iter().map(|w| w.text().to_string()).collect();

        Self {
            guess_words,
            solutions,
            frequencies,
            index,
        }
    }

    /// A lexicon with no solution pool
    #[must_use]
    pub fn from_words(guess_words: Vec<Word>) -> Self {
        Self::new(guess_words, None)
    }

    /// Every legal guess, sorted
    #[inline]
    #[must_use]
    pub fn guess_words(&self) -> &[Word] {
        &self.guess_words
    }

    /// Curated answers, sorted; empty without a frequency table
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    #[inline]
    #[must_use]
    pub fn has_solutions(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Whether `text` is in the guess vocabulary
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }
}
