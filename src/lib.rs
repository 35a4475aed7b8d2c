//! Crossword Cheater
//!
//! Query a word list with crossword-style wildcard patterns, fixed lengths,
//! required letters, and summary statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_cheater::query::QueryEngine;
//! use crossword_cheater::wordlists::WordStore;
//!
//! let store = WordStore::fallback();
//! let engine = QueryEngine::new(&store);
//!
//! for word in engine.match_pattern("th***ly") {
//!     println!("{word}");
//! }
//! ```

// Core domain types
pub mod core;

// Word queries and statistics
pub mod query;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
