//! Wordle word representation
//!
//! A Word stores a 5-letter word along with a precomputed letter multiset, so the
//! pattern engine never rescans strings inside the guess × pool loop.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Size of the legal alphabet (a-z)
pub const ALPHABET: usize = 26;

/// A 5-letter Wordle word with letter count tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
    counts: [u8; ALPHABET],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut counts = [0u8; ALPHABET];
        for &ch in &chars {
            counts[usize::from(ch - b'a')] += 1;
        }

        Ok(Self {
            text,
            chars,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Letter multiset indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; ALPHABET] {
        &self.counts
    }

    /// Number of occurrences of `letter` in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Iterate over the distinct letters of the word, in alphabet order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.count_of(letter) > 0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
