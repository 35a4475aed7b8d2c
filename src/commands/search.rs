//! Single query execution
//!
//! Runs one validated query and writes the listing.

use crate::output::write_matches;
use crate::query::{Query, QueryEngine};
use std::io::{self, Write};

/// Run `query` and write up to `limit` matches (all when `None`)
///
/// Returns the total number of matches.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn run_search<W: Write>(
    engine: &QueryEngine<'_>,
    query: &Query,
    limit: Option<usize>,
    out: &mut W,
) -> io::Result<usize> {
    let matches = engine.run(query);
    let shown = limit.map_or(matches.as_slice(), |limit| {
        &matches[..limit.min(matches.len())]
    });

    write_matches(out, shown, matches.len(), &query.to_string())?;
    Ok(matches.len())
}
