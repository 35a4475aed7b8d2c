//! In-memory word store
//!
//! Holds the session's word list. A store is built once (from a file, the
//! embedded fallback list, or an explicit collection) and is read-only
//! afterwards; queries borrow it.

use super::FALLBACK;
use super::loader::{load_from_file, words_from_slice, write_word_list};
use crate::core::Word;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Ordered, immutable snapshot of candidate words
///
/// Order is load order and duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<Word>,
}

/// How a successful load obtained its words
#[derive(Debug)]
pub enum LoadOutcome {
    /// Words were read from the requested file
    File { words: usize, skipped: usize },
    /// The file did not exist, so the embedded fallback list was used.
    /// `persist_error` is set when writing the fallback list to disk failed.
    Fallback {
        words: usize,
        persist_error: Option<io::Error>,
    },
}

impl LoadOutcome {
    /// Number of words now in the store
    #[must_use]
    pub const fn word_count(&self) -> usize {
        match self {
            Self::File { words, .. } | Self::Fallback { words, .. } => *words,
        }
    }
}

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl WordStore {
    /// Create a store from words in the given order
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Create a store holding the embedded fallback list
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: words_from_slice(FALLBACK),
        }
    }

    /// Load a store from a newline-delimited word list
    ///
    /// If the file does not exist, the embedded fallback list is used and
    /// written to `path` for future runs. Failing to write it is not an
    /// error; it is reported through [`LoadOutcome::Fallback`].
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` for any read failure other than a missing
    /// file (permission denied, invalid UTF-8, path is a directory, ...).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, LoadOutcome), LoadError> {
        let path = path.as_ref();

        match load_from_file(path) {
            Ok(parsed) => {
                let outcome = LoadOutcome::File {
                    words: parsed.words.len(),
                    skipped: parsed.skipped,
                };
                Ok((Self::from_words(parsed.words), outcome))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let store = Self::fallback();
                let persist_error = write_word_list(path, &store.words).err();
                let outcome = LoadOutcome::Fallback {
                    words: store.len(),
                    persist_error,
                };
                Ok((store, outcome))
            }
            Err(source) => Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words (duplicates included)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FALLBACK_COUNT;
    use std::fs;

    #[test]
    fn load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "Thickly\n\nthirdly\nnot a word\nquickly\n").unwrap();

        let (store, outcome) = WordStore::load(&path).unwrap();

        let texts: Vec<&str> = store.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["thickly", "thirdly", "quickly"]);
        assert!(matches!(
            outcome,
            LoadOutcome::File {
                words: 3,
                skipped: 1
            }
        ));
    }

    #[test]
    fn load_missing_file_falls_back_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");

        let (store, outcome) = WordStore::load(&path).unwrap();

        assert_eq!(store, WordStore::fallback());
        assert_eq!(store.len(), FALLBACK_COUNT);
        match outcome {
            LoadOutcome::Fallback {
                words,
                persist_error,
            } => {
                assert_eq!(words, FALLBACK_COUNT);
                assert!(persist_error.is_none());
            }
            LoadOutcome::File { .. } => panic!("expected fallback"),
        }

        // The persisted file loads back to the same store
        let (reloaded, outcome) = WordStore::load(&path).unwrap();
        assert_eq!(reloaded, store);
        assert!(matches!(outcome, LoadOutcome::File { skipped: 0, .. }));
    }

    #[test]
    fn load_fallback_survives_failed_persist() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so writing the fallback fails
        let path = dir.path().join("no_such_dir").join("wordlist.txt");

        let (store, outcome) = WordStore::load(&path).unwrap();

        assert_eq!(store.len(), FALLBACK_COUNT);
        assert!(matches!(
            outcome,
            LoadOutcome::Fallback {
                persist_error: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn load_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordStore::load(dir.path()).unwrap_err();
        let LoadError::Io { path, .. } = &err;
        assert_eq!(path, dir.path());
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn load_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        assert!(WordStore::load(&path).is_err());
    }

    #[test]
    fn default_store_is_empty() {
        let store = WordStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn outcome_word_count() {
        let file = LoadOutcome::File {
            words: 4,
            skipped: 2,
        };
        let fallback = LoadOutcome::Fallback {
            words: 9,
            persist_error: None,
        };
        assert_eq!(file.word_count(), 4);
        assert_eq!(fallback.word_count(), 9);
    }
}
