//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not available in the answer)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Hit (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Number of distinct patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Hit,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts `g`/🟩 for Hit, `y`/🟨 for Present and `x`/`-`/`_`/⬛/⬜ for Absent
    /// (letters in either case).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '🟩' => Some(Self::Hit),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'x' | 'X' | '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The canonical input letter for this symbol (`g`, `y` or `x`)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }

    /// Emoji square for this symbol
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All hits (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bucket index for pattern-count tables
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a perfect match (all hits)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (hits) and remove them from the
    ///    answer's available letter counts
    /// 2. Second pass: left to right, mark present-but-misplaced letters while
    ///    the letter still has an available count, otherwise absent
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Word, Pattern};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let answer = Word::new("there").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "yxyxg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess_chars = guess.chars();
        let answer_chars = answer.chars();
        let mut available = *answer.letter_counts();
        let mut digits = [0u8; WORD_LEN];

        for (i, digit) in digits.iter_mut().enumerate() {
            if guess_chars[i] == answer_chars[i] {
                *digit = 2;
                available[usize::from(guess_chars[i] - b'a')] -= 1;
            }
        }

        for (i, digit) in digits.iter_mut().enumerate() {
            if *digit == 0 {
                let slot = &mut available[usize::from(guess_chars[i] - b'a')];
                if *slot > 0 {
                    *digit = 1;
                    *slot -= 1;
                }
            }
        }

        Self(encode(&digits))
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LEN]) -> Self {
        Self(encode(&feedback.map(Feedback::digit)))
    }

    /// Decode into per-position feedback
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;

        for slot in &mut result {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }

        result
    }

    /// Count feedback squares of one kind
    #[must_use]
    pub fn count(self, kind: Feedback) -> usize {
        self.feedback().iter().filter(|&&f| f == kind).count()
    }

    /// Parse a pattern from a string like "gyxxg" or "🟩🟨⬛⬛🟩"
    ///
    /// Returns `None` unless the input is exactly five legal symbols
    /// (see [`Feedback::from_symbol`]).
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("gyxxg").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬛⬛🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("gyxx").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut feedback = [Feedback::Absent; WORD_LEN];
        let mut symbols = s.chars();

        for slot in &mut feedback {
            *slot = Feedback::from_symbol(symbols.next()?)?;
        }

        if symbols.next().is_some() {
            return None;
        }

        Some(Self::from_feedback(feedback))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|f| f.emoji()).collect()
    }
}

fn encode(digits: &[u8; WORD_LEN]) -> u8 {
    digits.iter().rev().fold(0u8, |acc, &digit| acc * 3 + digit)
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.feedback() {
            write!(f, "{}", feedback.letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = crate::error::SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            crate::error::SolverError::MalformedObservation(format!(
                "pattern '{s}' must be 5 symbols of g/y/x"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count(Feedback::Hit), 5);
        assert_eq!(Pattern::PERFECT.to_string(), "ggggg");
    }

    #[test]
    fn pattern_all_absent() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.value(), 0);
        assert_eq!(p.to_string(), "xxxxx");
    }

    // C(absent) R(absent) A(hit) N(absent) E(hit): 2×9 + 2×81 = 180
    #[test]
    fn pattern_encoding_matches_base3() {
        assert_eq!(pattern("crane", "slate").value(), 180);
    }

    #[test_case("eerie", "there", "yxyxg" ; "eerie against there")]
    #[test_case("allow", "llama", "ygyxx" ; "allow against llama")]
    #[test_case("speed", "erase", "yxyyx" ; "two present e")]
    #[test_case("robot", "floor", "yyxgx" ; "hit wins over earlier present")]
    #[test_case("llama", "allow", "ygyxx" ; "reverse duplicates")]
    #[test_case("tares", "scare", "xyyyy" ; "all misplaced")]
    #[test_case("spare", "scare", "gxggg" ; "single miss")]
    #[test_case("lemma", "legal", "ggxxy" ; "duplicate m absent")]
    #[test_case("elite", "ledge", "yyxxg" ; "e hit then present")]
    #[test_case("crane", "tonus", "xxxyx" ; "n present")]
    fn pattern_table(guess: &str, answer: &str, expected: &str) {
        assert_eq!(pattern(guess, answer).to_string(), expected);
    }

    #[test]
    fn credited_letters_never_exceed_answer_count() {
        let words = ["allow", "llama", "eerie", "there", "speed", "erase", "geese", "eaves"];
        for guess in words {
            for answer in words {
                let g = Word::new(guess).unwrap();
                let a = Word::new(answer).unwrap();
                let feedback = Pattern::calculate(&g, &a).feedback();

                for letter in g.distinct_letters() {
                    let credited = g
                        .chars()
                        .iter()
                        .zip(feedback)
                        .filter(|&(&ch, f)| ch == letter && f != Feedback::Absent)
                        .count();
                    assert!(
                        credited <= usize::from(a.count_of(letter)),
                        "{guess} vs {answer} over-credits {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn pattern_self_match_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "eerie"] {
            assert_eq!(pattern(word, word), Pattern::PERFECT);
        }
    }

    #[test]
    fn parse_accepts_all_symbol_sets() {
        let p1 = Pattern::parse("gyxxg").unwrap();
        let p2 = Pattern::parse("GY-_G").unwrap();
        let p3 = Pattern::parse("🟩🟨⬛⬜🟩").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 0 + 0 + 2×81 = 167
        assert_eq!(p1.value(), 167);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Pattern::parse("gyxxgx").is_none());
        assert!(Pattern::parse("gyx").is_none());
        assert!(Pattern::parse("gyqxg").is_none());
        assert!(Pattern::parse("").is_none());
        assert!("gyqxg".parse::<Pattern>().is_err());
    }

    #[test]
    fn feedback_round_trip_through_symbols() {
        let feedback = [
            Feedback::Hit,
            Feedback::Absent,
            Feedback::Present,
            Feedback::Present,
            Feedback::Absent,
        ];
        let p = Pattern::from_feedback(feedback);
        assert_eq!(p.feedback(), feedback);
        assert_eq!(p.to_string(), "gxyyx");
        assert_eq!(p.to_emoji(), "🟩⬛🟨🟨⬛");
        assert_eq!(p.count(Feedback::Present), 2);
    }
}
