//! Word lists for crossword queries
//!
//! Provides the word store, file loading, and the embedded fallback list
//! used when no word list file exists yet.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
pub use store::{LoadError, LoadOutcome, WordStore};

/// Default word list path, relative to the working directory
pub const DEFAULT_WORDLIST: &str = "wordlist.txt";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn fallback_contains_sample_words() {
        for expected in ["thickly", "thirdly", "quickly", "python", "module"] {
            assert!(FALLBACK.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn fallback_store_matches_embedded_list() {
        let store = WordStore::fallback();
        assert_eq!(store.len(), FALLBACK_COUNT);
        assert_eq!(store.words()[0].text(), FALLBACK[0]);
    }
}
