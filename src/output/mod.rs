//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_batch_report, print_benchmark_result, print_freq_stats,
    print_header, print_history, print_recommendation, print_remaining, print_solve_result,
    recommend_with_spinner,
};
