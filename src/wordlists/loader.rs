//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or embedded constants, and
//! writes them back out.

use crate::core::Word;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Words parsed from a list, plus how many non-blank lines were rejected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    pub words: Vec<Word>,
    pub skipped: usize,
}

/// Parse newline-delimited text into words
///
/// Blank lines are ignored. Lines that are not a single alphabetic word are
/// counted in `skipped`. File order is preserved and duplicates are kept.
#[must_use]
pub fn parse_word_list(content: &str) -> ParsedList {
    let mut parsed = ParsedList::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => parsed.words.push(word),
            Err(_) => parsed.skipped += 1,
        }
    }

    parsed
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use crossword_cheater::wordlists::loader::load_from_file;
///
/// let parsed = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", parsed.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<ParsedList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Write words to a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_word_list<P: AsRef<Path>>(path: P, words: &[Word]) -> io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for word in words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use crossword_cheater::wordlists::loader::words_from_slice;
/// use crossword_cheater::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
