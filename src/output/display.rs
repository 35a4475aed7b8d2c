//! Display functions for query and command results
//!
//! Everything writes to a caller-supplied sink so the interactive menu can
//! be driven from scripted input in tests.

use super::formatters::{
    COLUMN_WIDTH, COLUMNS, distribution_bar, format_columns, plural_matches,
};
use super::status;
use crate::commands::BenchmarkResult;
use crate::core::Word;
use crate::query::Statistics;
use crate::wordlists::LoadOutcome;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 40;
const BAR_WIDTH: usize = 30;

/// Write a match listing
///
/// `shown` may be a prefix of the full result; `total` is the full count,
/// and a remainder line is printed when some matches were left out.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_matches<W: Write>(
    out: &mut W,
    shown: &[&Word],
    total: usize,
    label: &str,
) -> io::Result<()> {
    if total == 0 {
        return writeln!(out, "{}", status::error("No matches found!"));
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        status::success(format!(
            "Found {total} {} for {label}:",
            plural_matches(total)
        ))
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for row in format_columns(shown, COLUMNS, COLUMN_WIDTH) {
        writeln!(out, "{}", row.trim_end())?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    if total > shown.len() {
        writeln!(out, "... and {} more matches", total - shown.len())?;
    }

    Ok(())
}

/// Write the word list statistics report
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_statistics<W: Write>(out: &mut W, stats: Option<&Statistics>) -> io::Result<()> {
    let Some(stats) = stats else {
        return writeln!(out, "{}", status::error("No words loaded."));
    };

    writeln!(out, "\n📊 {}", "WORDLIST STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out, "Total words: {}", stats.total_words)?;
    writeln!(
        out,
        "Shortest word: {} ({} letters)",
        stats.shortest_word,
        stats.shortest_word.len()
    )?;
    writeln!(
        out,
        "Longest word: {} ({} letters)",
        stats.longest_word,
        stats.longest_word.len()
    )?;
    writeln!(out, "Average length: {:.2} letters", stats.average_length)?;

    writeln!(out, "\nLength distribution:")?;
    let peak = stats.peak_count();
    for (length, count) in &stats.length_distribution {
        let bar = distribution_bar(*count, peak, BAR_WIDTH);
        writeln!(
            out,
            "  {length:>2} letters: {count:>5} words {}",
            bar.green()
        )?;
    }

    Ok(())
}

/// Report how the word list was obtained
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_load_outcome<W: Write>(
    out: &mut W,
    path: &Path,
    outcome: &LoadOutcome,
) -> io::Result<()> {
    match outcome {
        LoadOutcome::File { words, skipped } => {
            writeln!(
                out,
                "{}",
                status::success(format!("Loaded {words} words from {}", path.display()))
            )?;
            if *skipped > 0 {
                writeln!(
                    out,
                    "{}",
                    status::warn(format!(
                        "Skipped {skipped} lines that are not single words \
                         (only letters allowed, no spaces, hyphens or apostrophes)"
                    ))
                )?;
            }
        }
        LoadOutcome::Fallback {
            words,
            persist_error,
        } => {
            writeln!(
                out,
                "{}",
                status::warn(format!(
                    "{} not found. Creating a sample wordlist...",
                    path.display()
                ))
            )?;
            match persist_error {
                None => writeln!(
                    out,
                    "{}",
                    status::success(format!("Created sample wordlist with {words} words"))
                )?,
                Some(e) => writeln!(
                    out,
                    "{}",
                    status::error(format!("Error creating sample wordlist: {e}"))
                )?,
            }
        }
    }
    Ok(())
}

/// Write the result of a benchmark
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_benchmark_result<W: Write>(out: &mut W, result: &BenchmarkResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BENCHMARK RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 {}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Words in list:    {}", result.store_size)?;
    writeln!(out, "   Queries run:      {}", result.queries)?;
    writeln!(out, "   Total matches:    {}", result.total_matches)?;
    writeln!(
        out,
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches).bright_yellow().bold()
    )?;
    writeln!(out, "   Avg wildcards:    {:.2}", result.average_wildcards)?;
    writeln!(
        out,
        "   Empty results:    {}",
        format!("{}", result.empty_results).yellow()
    )?;
    writeln!(out, "   Time taken:       {:.3}s", result.duration.as_secs_f64())?;
    writeln!(out, "   Queries/second:   {:.1}", result.queries_per_second)?;

    Ok(())
}
