//! Demonstration mode
//!
//! Runs a fixed set of sample patterns and prints truncated results.

use super::search::run_search;
use crate::core::Pattern;
use crate::query::{Query, QueryEngine};
use colored::Colorize;
use std::io::{self, Write};

/// Sample patterns shown in demonstration mode
pub const DEMO_PATTERNS: &[&str] = &["th***ly", "c**e", "pro*****ng", "***ful", "*y*h*n"];

/// Matches shown per pattern before the remainder is summarized
pub const DEMO_LIMIT: usize = 10;

/// Run every demo pattern and write the results
///
/// Returns the match count for each pattern, in order.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn run_demo<W: Write>(engine: &QueryEngine<'_>, out: &mut W) -> io::Result<Vec<usize>> {
    writeln!(out, "\n🎬 {}", "DEMONSTRATION MODE".bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(50))?;

    let mut counts = Vec::with_capacity(DEMO_PATTERNS.len());
    for &raw in DEMO_PATTERNS {
        writeln!(out, "\n🔍 Testing pattern: '{raw}'")?;
        let count = match Pattern::parse(raw) {
            Some(pattern) => run_search(engine, &Query::Pattern(pattern), Some(DEMO_LIMIT), out)?,
            None => 0,
        };
        counts.push(count);
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordStore;

    #[test]
    fn demo_on_fallback_list() {
        let store = WordStore::fallback();
        let engine = QueryEngine::new(&store);
        let mut out = Vec::new();

        let counts = run_demo(&engine, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(counts, [2, 0, 0, 0, 1]);
        for raw in DEMO_PATTERNS {
            assert!(text.contains(&format!("Testing pattern: '{raw}'")));
        }
        assert!(text.contains("Found 2 matches for pattern 'th***ly':"));
        assert!(text.contains("python"));
    }

    #[test]
    fn demo_truncates_long_results() {
        let words: Vec<Word> = (b'a'..=b'z')
            .map(|c| Word::new(format!("{}ythen", c as char)).unwrap())
            .collect();
        let store = WordStore::from_words(words);
        let engine = QueryEngine::new(&store);
        let mut out = Vec::new();

        let counts = run_demo(&engine, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(counts[4], 26);
        assert!(text.contains("... and 16 more matches"));
    }
}
