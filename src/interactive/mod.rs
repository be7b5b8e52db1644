//! Full-screen interactive mode

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, ResultsView, Statistics, run_tui};
