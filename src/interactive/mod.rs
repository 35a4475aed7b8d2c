//! Interactive live-search TUI

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, SearchMode, run_tui};
