//! Core domain types for crossword queries
//!
//! Words, wildcard patterns and required-letter sets. Everything here is
//! pure and independent of how words are loaded or displayed.

mod letters;
mod pattern;
mod word;

pub use letters::LetterSet;
pub use pattern::{Pattern, Slot, WILDCARD};
pub use word::{Word, WordError};
