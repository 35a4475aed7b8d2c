//! Query engine over a word store
//!
//! Every query is a single linear scan of an immutable snapshot, so the
//! engine holds nothing but a borrow of the store.

use super::Statistics;
use crate::core::{LetterSet, Pattern, Word};
use crate::wordlists::WordStore;
use rayon::prelude::*;
use std::fmt;
use std::num::NonZeroUsize;

/// Stores at least this large are scanned in parallel
pub const PARALLEL_THRESHOLD: usize = 50_000;

/// A validated word list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Pattern(Pattern),
    Length(NonZeroUsize),
    Containing(LetterSet),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => write!(f, "pattern '{pattern}'"),
            Self::Length(length) => write!(f, "{length} letters"),
            Self::Containing(letters) => write!(f, "containing '{letters}'"),
        }
    }
}

/// Stateless query functions over a word store
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a WordStore,
}

impl<'a> QueryEngine<'a> {
    #[must_use]
    pub const fn new(store: &'a WordStore) -> Self {
        Self { store }
    }

    /// The store being queried
    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    /// Words matching a wildcard pattern such as `th***ly`
    ///
    /// The pattern is trimmed and lowercased; an empty pattern matches
    /// nothing. Results are sorted ascending.
    ///
    /// # Examples
    /// ```
    /// use crossword_cheater::core::Word;
    /// use crossword_cheater::query::QueryEngine;
    /// use crossword_cheater::wordlists::WordStore;
    ///
    /// let store = WordStore::from_words(
    ///     ["thirdly", "quickly", "thickly"].map(|w| Word::new(w).unwrap()),
    /// );
    /// let engine = QueryEngine::new(&store);
    ///
    /// let matches: Vec<&str> = engine.match_pattern("th***ly").iter().map(|w| w.text()).collect();
    /// assert_eq!(matches, ["thickly", "thirdly"]);
    /// assert!(engine.match_pattern("").is_empty());
    /// ```
    #[must_use]
    pub fn match_pattern(&self, pattern: &str) -> Vec<&'a Word> {
        Pattern::parse(pattern).map_or_else(Vec::new, |pattern| self.matching(&pattern))
    }

    /// Words matching an already parsed pattern, sorted ascending
    #[must_use]
    pub fn matching(&self, pattern: &Pattern) -> Vec<&'a Word> {
        self.select(|word| pattern.matches(word))
    }

    /// Words with exactly `length` letters, sorted ascending
    #[must_use]
    pub fn match_length(&self, length: usize) -> Vec<&'a Word> {
        self.select(|word| word.len() == length)
    }

    /// Words containing every letter of `letters`, sorted ascending
    ///
    /// Letters are lowercased, and repeats or ordering in `letters` make no
    /// difference. Every character is required, so a space matches no word,
    /// and empty input matches nothing.
    #[must_use]
    pub fn match_contains_all(&self, letters: &str) -> Vec<&'a Word> {
        LetterSet::parse(letters).map_or_else(Vec::new, |letters| self.containing(&letters))
    }

    /// Words containing every letter of a parsed set, sorted ascending
    #[must_use]
    pub fn containing(&self, letters: &LetterSet) -> Vec<&'a Word> {
        self.select(|word| letters.is_satisfied_by(word))
    }

    /// Run a validated query
    #[must_use]
    pub fn run(&self, query: &Query) -> Vec<&'a Word> {
        match query {
            Query::Pattern(pattern) => self.matching(pattern),
            Query::Length(length) => self.match_length(length.get()),
            Query::Containing(letters) => self.containing(letters),
        }
    }

    /// Summary statistics of the whole store, or `None` if it is empty
    #[must_use]
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::compute(self.store.words())
    }

    /// Collect words accepted by `predicate`, sorted ascending
    fn select<F>(&self, predicate: F) -> Vec<&'a Word>
    where
        F: Fn(&Word) -> bool + Sync,
    {
        let store: &'a WordStore = self.store;
        let words = store.words();

        if words.len() >= PARALLEL_THRESHOLD {
            let mut matches: Vec<&'a Word> =
                words.par_iter().filter(|&word| predicate(word)).collect();
            matches.par_sort_unstable();
            matches
        } else {
            let mut matches: Vec<&'a Word> = words.iter().filter(|&word| predicate(word)).collect();
            matches.sort_unstable();
            matches
        }
    }
}
