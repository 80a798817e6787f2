//! Wordle solving algorithms
//!
//! This module contains the possibility pool, the two guess scorers, the
//! ranker that runs them, and the session that ties them together.

pub mod entropy;
pub mod expected;
pub mod pool;
pub mod ranker;
pub mod scorer;
mod session;

pub use pool::PossibilityPool;
pub use scorer::{Mode, Score, ScoredCandidate, Scorer, ScorerKind};
pub use session::{Recommendation, Session, SessionConfig};
