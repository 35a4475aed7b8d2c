//! Crossword Cheater - CLI
//!
//! Interactive menu, live-search TUI, and one-shot queries over a word list.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use crossword_cheater::{
    commands::{
        BenchmarkConfig, INTERRUPTED, parse_letters, parse_pattern, run_benchmark, run_demo,
        run_menu, run_search,
    },
    output::{status, write_benchmark_result, write_load_outcome, write_statistics},
    query::{Query, QueryEngine},
    wordlists::{DEFAULT_WORDLIST, WordStore},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "crossword_cheater",
    about = "Find crossword answers by pattern (th***ly), length, or required letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (created from a sample list if missing)
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Run the sample patterns and show truncated results
    Demo,

    /// Interactive live-search TUI
    Browse,

    /// Find words matching a pattern, using * for unknown letters
    Pattern {
        /// Pattern such as th***ly
        pattern: String,

        /// Show at most this many matches
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find words with an exact number of letters
    Length {
        /// Number of letters (at least 1)
        length: NonZeroUsize,

        /// Show at most this many matches
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find words containing all of the given letters
    Contains {
        /// Letters that must appear, in any order
        letters: String,

        /// Show at most this many matches
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show word list statistics
    Stats,

    /// Benchmark pattern queries with random patterns
    Benchmark {
        /// Number of random patterns to query
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Probability that each letter becomes a wildcard
        #[arg(short, long, default_value = "0.5", value_parser = parse_probability)]
        mask: f64,

        /// Random seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not between 0 and 1"))
    }
}

/// Load the word store, reporting how it was obtained
///
/// A read failure is reported and leaves an empty store.
fn load_store(path: &Path) -> Result<WordStore> {
    match WordStore::load(path) {
        Ok((store, outcome)) => {
            write_load_outcome(&mut io::stdout(), path, &outcome)?;
            Ok(store)
        }
        Err(e) => {
            eprintln!("{}", status::error(e));
            Ok(WordStore::default())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let store = load_store(&cli.wordlist)?;
    let engine = QueryEngine::new(&store);

    // Default to the menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu);

    match command {
        Commands::Menu => run_menu_command(&engine),
        Commands::Demo => {
            run_demo(&engine, &mut io::stdout())?;
            Ok(())
        }
        Commands::Browse => run_browse_command(engine),
        Commands::Pattern { pattern, limit } => {
            run_query_command(&engine, &parse_pattern(&pattern)?, limit)
        }
        Commands::Length { length, limit } => {
            run_query_command(&engine, &Query::Length(length), limit)
        }
        Commands::Contains { letters, limit } => {
            run_query_command(&engine, &parse_letters(&letters)?, limit)
        }
        Commands::Stats => {
            write_statistics(&mut io::stdout(), engine.statistics().as_ref())?;
            Ok(())
        }
        Commands::Benchmark { count, mask, seed } => {
            run_benchmark_command(&engine, count, mask, seed)
        }
    }
}

fn run_menu_command(engine: &QueryEngine<'_>) -> Result<()> {
    if engine.store().is_empty() {
        println!("{}", status::error("No words loaded. Exiting..."));
        return Ok(());
    }

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\n{}", status::farewell(INTERRUPTED));
        std::process::exit(0);
    }) {
        eprintln!("{}", status::warn(format!("Failed to set Ctrl+C handler: {e}")));
    }

    println!("🚀 Starting Crossword Cheater...");
    run_menu(engine, &mut io::stdin().lock(), &mut io::stdout())
}

fn run_query_command(engine: &QueryEngine<'_>, query: &Query, limit: Option<usize>) -> Result<()> {
    let mut stdout = io::stdout();
    run_search(engine, query, limit, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn run_benchmark_command(
    engine: &QueryEngine<'_>,
    count: usize,
    mask: f64,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Running benchmark with {count} random patterns (seed {seed})...");

    let mut rng = StdRng::seed_from_u64(seed);
    let config = BenchmarkConfig {
        queries: count,
        mask_probability: mask,
        show_progress: true,
    };
    let result = run_benchmark(engine, config, &mut rng).map_err(|e| anyhow!(e))?;

    write_benchmark_result(&mut io::stdout(), &result)?;
    Ok(())
}

fn run_browse_command(engine: QueryEngine<'_>) -> Result<()> {
    use crossword_cheater::interactive::{App, run_tui};

    run_tui(App::new(engine))
}
