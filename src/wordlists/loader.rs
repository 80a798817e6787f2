//! Word list loading utilities
//!
//! Provides functions to load word lists from files, locate them next to the
//! executable, and fall back to the embedded list.

use super::embedded::FALLBACK_WORDS;
use crate::core::Word;
use log::{info, warn};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name searched for when no word list is given
pub const DEFAULT_WORDLIST: &str = "words.txt";

/// Parse a word list, one word per line
///
/// Lines are trimmed and lowercased; anything that is not five ASCII letters is
/// skipped. The result is sorted and deduplicated.
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect();

    words.sort();
    words.dedup();
    words
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    Ok(parse_words(&fs::read_to_string(path)?))
}

/// Convert a string slice to a sorted, deduplicated Word vector
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["slate", "CRANE", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut words: Vec<Word> = slice.iter().filter_map(|&s| Word::new(s).ok()).collect();
    words.sort();
    words.dedup();
    words
}

/// Locate a data file
///
/// Tries `path` as given (relative to the working directory), then the same file
/// name next to the running executable.
#[must_use]
pub fn resolve(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    let file_name = path.file_name()?;
    let beside_exe = env::current_exe().ok()?.parent()?.join(file_name);
    beside_exe.is_file().then_some(beside_exe)
}

/// Load the guess vocabulary, falling back to the embedded list
///
/// `path` defaults to [`DEFAULT_WORDLIST`]. A missing, unreadable or empty file
/// is not an error: a warning is logged and [`FALLBACK_WORDS`] is used.
#[must_use]
pub fn load_or_fallback(path: Option<&Path>) -> Vec<Word> {
    let requested = path.unwrap_or_else(|| Path::new(DEFAULT_WORDLIST));

    if let Some(found) = resolve(requested) {
        match load_from_file(&found) {
            Ok(words) if !words.is_empty() => {
                info!("loaded {} words from {}", words.len(), found.display());
                return words;
            }
            Ok(_) => warn!("{} contains no five-letter words", found.display()),
            Err(e) => warn!("error reading {}: {e}", found.display()),
        }
    } else {
        warn!("word list '{}' not found", requested.display());
    }

    let words = words_from_slice(FALLBACK_WORDS);
    warn!("using fallback list ({} words)", words.len());
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_normalizes_and_dedups() {
        let words = parse_words("Slate\n crane \n\nslate\ntoolong\nab1de\nCRANE\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn fallback_words_are_valid() {
        let words = words_from_slice(FALLBACK_WORDS);
        assert!(!words.is_empty());
        assert!(words.len() <= FALLBACK_WORDS.len());
        assert!(FALLBACK_WORDS.iter().all(|w| Word::new(*w).is_ok()));
    }

    #[test]
    fn missing_file_uses_fallback() {
        let words = load_or_fallback(Some(Path::new("definitely/not/here/words-missing.txt")));
        assert_eq!(words, words_from_slice(FALLBACK_WORDS));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = env::temp_dir().join(format!("wordle_advisor_loader_{}.txt", std::process::id()));
        fs::write(&path, "tonus\ncrane\n").unwrap();

        let words = load_or_fallback(Some(&path));
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "tonus"]);
    }

    #[test]
    fn resolve_missing_returns_none() {
        assert!(resolve(Path::new("no/such/dir/zz-words.txt")).is_none());
    }
}
