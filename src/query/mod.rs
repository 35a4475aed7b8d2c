//! Word list queries
//!
//! Pattern, length and letter-containment lookups plus summary statistics.

mod engine;
mod statistics;

pub use engine::{PARALLEL_THRESHOLD, Query, QueryEngine};
pub use statistics::Statistics;
