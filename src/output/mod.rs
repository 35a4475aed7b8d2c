//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod status;

pub use display::{
    write_benchmark_result, write_load_outcome, write_matches, write_statistics,
};
