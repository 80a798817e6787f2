//! Command implementations

pub mod analyze;
pub mod batch;
pub mod benchmark;
pub mod freq;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use batch::{BatchOutcome, BatchReport, BatchStep, run_batch};
pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use freq::{FreqStats, run_freq};
pub use simple::{Command, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
