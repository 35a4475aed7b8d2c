//! Required-letter sets for containment queries

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Set of letters that must all appear somewhere in a word
///
/// Order and repetition in the source text are irrelevant: `"aab"`, `"ba"`
/// and `"AB"` all describe the same set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: FxHashSet<char>,
}

impl LetterSet {
    /// Build a letter set from user input
    ///
    /// Input is lowercased and every character is required, whitespace
    /// included. Returns `None` for empty input.
    ///
    /// # Examples
    /// ```
    /// use crossword_cheater::core::{LetterSet, Word};
    ///
    /// let letters = LetterSet::parse("KQ").unwrap();
    /// assert_eq!(letters.len(), 2);
    /// assert!(letters.is_satisfied_by(&Word::new("quickly").unwrap()));
    /// assert!(!letters.is_satisfied_by(&Word::new("thickly").unwrap()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let letters: FxHashSet<char> = input
            .to_lowercase()
            .chars()
            .collect();

        if letters.is_empty() {
            None
        } else {
            Some(Self { letters })
        }
    }

    /// Number of distinct required letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Parsed sets are never empty
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True if every required letter occurs in `word`
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.letters.iter().all(|&c| word.contains_letter(c))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<char> = self.letters.iter().copied().collect();
        sorted.sort_unstable();
        let rendered: String = sorted.into_iter().collect();
        f.pad(&rendered)
    }
}
