//! Validation of raw user input into queries
//!
//! Rejected input never reaches the query engine; the caller reports the
//! error and prompts again.

use crate::core::{LetterSet, Pattern};
use crate::query::Query;
use std::fmt;
use std::num::NonZeroUsize;

/// Error type for rejected user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyPattern,
    NotANumber,
    NonPositiveLength,
    NoLetters,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "Please enter a valid pattern!"),
            Self::NotANumber => write!(f, "Please enter a valid number!"),
            Self::NonPositiveLength => write!(f, "Please enter a positive number!"),
            Self::NoLetters => write!(f, "Please enter some letters!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a wildcard pattern
///
/// # Errors
///
/// Returns `InputError::EmptyPattern` if the input is blank.
pub fn parse_pattern(input: &str) -> Result<Query, InputError> {
    Pattern::parse(input)
        .map(Query::Pattern)
        .ok_or(InputError::EmptyPattern)
}

/// Parse a word length
///
/// # Errors
///
/// Returns `InputError::NotANumber` for non-integer input and
/// `InputError::NonPositiveLength` for zero or negative numbers.
pub fn parse_length(input: &str) -> Result<Query, InputError> {
    let value: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .map(Query::Length)
        .ok_or(InputError::NonPositiveLength)
}

/// Parse a set of required letters
///
/// # Errors
///
/// Returns `InputError::NoLetters` if the input is blank.
pub fn parse_letters(input: &str) -> Result<Query, InputError> {
    LetterSet::parse(input.trim())
        .map(Query::Containing)
        .ok_or(InputError::NoLetters)
}
