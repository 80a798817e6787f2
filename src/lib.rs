//! Wordle Advisor
//!
//! Narrows a Wordle vocabulary with the feedback you receive and recommends the
//! next guess, by information gain or by expected remaining solutions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//! use wordle_advisor::solver::{Session, SessionConfig};
//! use wordle_advisor::wordlists::Lexicon;
//! use wordle_advisor::wordlists::loader::words_from_slice;
//!
//! // Feedback for a guess against a hypothetical answer
//! let guess = Word::new("allow").unwrap();
//! let answer = Word::new("llama").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "ygyxx");
//!
//! // A session narrows the pool and ranks guesses
//! let lexicon = Lexicon::from_words(words_from_slice(&["crane", "tonus", "bonus", "slate"]));
//! let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();
//! session.apply_str("crane", "xxxyx").unwrap();
//! let rec = session.recommend().unwrap();
//! assert_eq!(rec.pool_size, 2);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
