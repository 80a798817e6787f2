//! Full-screen terminal interface
//!
//! A ratatui front-end over a [`Session`](crate::solver::Session): type the
//! word you played and its feedback, see the next recommendations.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
