//! Formatting utilities for terminal output

use crate::core::Word;

/// Number of words per row in match listings
pub const COLUMNS: usize = 3;

/// Width each word is padded to in match listings
pub const COLUMN_WIDTH: usize = 15;

/// Lay words out in rows of `columns`, each left-aligned to `width`
#[must_use]
pub fn format_columns(words: &[&Word], columns: usize, width: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one row of the length distribution, scaled to the largest bucket
#[must_use]
pub fn distribution_bar(count: usize, peak: usize, width: usize) -> String {
    create_progress_bar(count as f64, peak as f64, width)
}

/// "match" or "matches" depending on `count`
#[must_use]
pub const fn plural_matches(count: usize) -> &'static str {
    if count == 1 { "match" } else { "matches" }
}
