//! Command implementations

pub mod benchmark;
pub mod demo;
pub mod input;
pub mod menu;
pub mod search;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use demo::run_demo;
pub use input::{InputError, parse_length, parse_letters, parse_pattern};
pub use menu::{GOODBYE, INTERRUPTED, MENU, MenuCommand, run_menu};
pub use search::run_search;
