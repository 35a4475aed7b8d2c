//! Word list entry representation
//!
//! A Word is a normalized (trimmed, lowercase) run of alphabetic characters.

use std::fmt;

/// A single candidate word from the word list
///
/// Stores the lowercase text along with its character count, since
/// crossword lengths are measured in letters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    Whitespace,
    InvalidCharacters(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::Whitespace => write!(f, "Word must not contain whitespace"),
            Self::InvalidCharacters(c) => {
                write!(f, "Word must contain only letters, found {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing remains after trimming
    /// - Whitespace appears inside the word
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use crossword_cheater::core::Word;
    ///
    /// let word = Word::new("  Quickly\n").unwrap();
    /// assert_eq!(word.text(), "quickly");
    /// assert_eq!(word.len(), 7);
    ///
    /// assert!(Word::new("ice cream").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters(bad));
        }

        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Iterate over the letters of the word
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("thickly").unwrap();
        assert_eq!(word.text(), "thickly");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        let word = Word::new("  THIRDly\r\n").unwrap();
        assert_eq!(word.text(), "thirdly");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   \t"), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_internal_whitespace() {
        assert_eq!(Word::new("ice cream"), Err(WordError::Whitespace));
        assert_eq!(Word::new("a\tb"), Err(WordError::Whitespace));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters('3')));
        assert_eq!(Word::new("c*t"), Err(WordError::InvalidCharacters('*')));
        assert!(Word::new("well-known").is_err());
    }

    #[test]
    fn word_len_counts_characters_not_bytes() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.text().len(), 5);
    }

    #[test]
    fn word_contains_letter() {
        let word = Word::new("quickly").unwrap();
        assert!(word.contains_letter('q'));
        assert!(word.contains_letter('y'));
        assert!(!word.contains_letter('z'));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("thirdly").unwrap(),
            Word::new("quickly").unwrap(),
            Word::new("thickly").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["quickly", "thickly", "thirdly"]);
    }

    #[test]
    fn word_display_honors_padding() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "cat");
        assert_eq!(format!("[{word:<5}]"), "[cat  ]");
    }
}
