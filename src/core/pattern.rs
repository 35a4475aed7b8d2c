//! Crossword wildcard patterns
//!
//! A pattern is a sequence of slots, one per letter of the answer:
//! - `*` matches exactly one arbitrary letter
//! - any other character matches itself (case-insensitively)
//!
//! Patterns are anchored at both ends, so a word only matches when it has
//! exactly as many letters as the pattern has slots. Characters such as `.`,
//! `?` or `[` carry no special meaning and are compared literally.

use super::Word;
use std::fmt;

/// Wildcard character accepted in patterns
pub const WILDCARD: char = '*';

/// One position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Matches any single letter
    Any,
    /// Matches only this (lowercase) letter
    Letter(char),
}

impl Slot {
    #[inline]
    fn accepts(self, letter: char) -> bool {
        match self {
            Self::Any => true,
            Self::Letter(expected) => expected == letter,
        }
    }
}

/// Parsed crossword pattern such as `th***ly`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    /// Parse a pattern from user input
    ///
    /// Input is trimmed and lowercased. Returns `None` if nothing remains,
    /// since an empty pattern matches no words.
    ///
    /// # Examples
    /// ```
    /// use crossword_cheater::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("TH***LY").unwrap();
    /// assert_eq!(pattern.len(), 7);
    /// assert!(pattern.matches(&Word::new("thickly").unwrap()));
    /// assert!(!pattern.matches(&Word::new("quickly").unwrap()));
    ///
    /// assert!(Pattern::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let slots = normalized
            .chars()
            .map(|c| {
                if c == WILDCARD {
                    Slot::Any
                } else {
                    Slot::Letter(c)
                }
            })
            .collect();

        Some(Self { slots })
    }

    /// Number of slots (and therefore letters of any matching word)
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Parsed patterns are never empty
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of `*` slots
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.slots.iter().filter(|&&slot| slot == Slot::Any).count()
    }

    /// Check whether a word fits the pattern
    ///
    /// Lengths must be equal, and every literal slot must equal the letter
    /// at the same position.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, letter)| slot.accepts(letter))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Any => WILDCARD,
                Slot::Letter(c) => *c,
            })
            .collect();
        f.pad(&rendered)
    }
}
