//! Benchmark command
//!
//! Measures pattern query throughput using random patterns derived from
//! words in the store.

use crate::core::{Pattern, WILDCARD, Word};
use crate::query::QueryEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};

/// Parameters of a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub queries: usize,
    /// Probability that each letter is replaced by a wildcard
    pub mask_probability: f64,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            queries: 1_000,
            mask_probability: 0.5,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub store_size: usize,
    pub queries: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    /// Mean number of `*` slots per generated pattern
    pub average_wildcards: f64,
    pub empty_results: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Build a pattern from `word` by masking each letter with probability `mask`
pub fn random_pattern<R: Rng + ?Sized>(word: &Word, mask: f64, rng: &mut R) -> String {
    let mask = if mask.is_nan() { 0.0 } else { mask.clamp(0.0, 1.0) };
    word.chars()
        .map(|c| if rng.random_bool(mask) { WILDCARD } else { c })
        .collect()
}

/// Run `config.queries` random pattern queries against the engine's store
///
/// # Errors
///
/// Returns an error if the store is empty.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark<R: Rng + ?Sized>(
    engine: &QueryEngine<'_>,
    config: BenchmarkConfig,
    rng: &mut R,
) -> Result<BenchmarkResult, String> {
    let words = engine.store().words();
    if words.is_empty() {
        return Err("Cannot benchmark an empty word list".to_string());
    }

    let mut patterns = Vec::with_capacity(config.queries);
    for _ in 0..config.queries {
        let Some(word) = words.choose(rng) else {
            continue;
        };
        let text = random_pattern(word, config.mask_probability, rng);
        if let Some(pattern) = Pattern::parse(&text) {
            patterns.push(pattern);
        }
    }
    let total_wildcards: usize = patterns.iter().map(Pattern::wildcard_count).sum();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(patterns.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut total_matches = 0;
    let mut empty_results = 0;
    let start = Instant::now();

    for pattern in &patterns {
        let count = engine.matching(pattern).len();
        total_matches += count;
        if count == 0 {
            empty_results += 1;
        }
        pb.set_message(pattern.to_string());
        pb.inc(1);
    }

    let duration = start.elapsed();
    pb.finish_and_clear();

    let queries = patterns.len();
    let per_query = |total: usize| {
        if queries == 0 {
            0.0
        } else {
            total as f64 / queries as f64
        }
    };
    Ok(BenchmarkResult {
        store_size: words.len(),
        queries,
        total_matches,
        average_matches: per_query(total_matches),
        average_wildcards: per_query(total_wildcards),
        empty_results,
        duration,
        queries_per_second: queries as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
