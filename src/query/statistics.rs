//! Word list summary statistics

use crate::core::Word;
use std::collections::BTreeMap;

/// Summary of a non-empty word list
///
/// Recomputed on every request; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_words: usize,
    /// First word (in load order) of minimal length
    pub shortest_word: Word,
    /// First word (in load order) of maximal length
    pub longest_word: Word,
    pub average_length: f64,
    /// Word length -> number of words with that length
    pub length_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Compute statistics over `words`
    ///
    /// Returns `None` for an empty list, where shortest, longest and average
    /// are undefined.
    #[must_use]
    pub fn compute(words: &[Word]) -> Option<Self> {
        let first = words.first()?;

        let mut shortest = first;
        let mut longest = first;
        let mut total_letters = 0usize;
        let mut length_distribution = BTreeMap::new();

        for word in words {
            // Strict comparisons keep the earliest word on ties
            if word.len() < shortest.len() {
                shortest = word;
            }
            if word.len() > longest.len() {
                longest = word;
            }
            total_letters += word.len();
            *length_distribution.entry(word.len()).or_insert(0) += 1;
        }

        Some(Self {
            total_words: words.len(),
            shortest_word: shortest.clone(),
            longest_word: longest.clone(),
            average_length: total_letters as f64 / words.len() as f64,
            length_distribution,
        })
    }

    /// Number of words with the most common length
    #[must_use]
    pub fn peak_count(&self) -> usize {
        self.length_distribution
            .values()
            .copied()
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn empty_list_has_no_statistics() {
        assert!(Statistics::compute(&[]).is_none());
    }

    #[test]
    fn single_word() {
        let words = words_from_slice(&["python"]);
        let stats = Statistics::compute(&words).unwrap();

        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.shortest_word.text(), "python");
        assert_eq!(stats.longest_word.text(), "python");
        assert!((stats.average_length - 6.0).abs() < f64::EPSILON);
        assert_eq!(stats.length_distribution, BTreeMap::from([(6, 1)]));
    }

    #[test]
    fn mixed_lengths() {
        let words = words_from_slice(&["cat", "python", "dog", "algorithm"]);
        let stats = Statistics::compute(&words).unwrap();

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.shortest_word.text(), "cat");
        assert_eq!(stats.longest_word.text(), "algorithm");
        assert!((stats.average_length - 21.0 / 4.0).abs() < 1e-9);
        assert_eq!(
            stats.length_distribution,
            BTreeMap::from([(3, 2), (6, 1), (9, 1)])
        );
        assert_eq!(stats.peak_count(), 2);
    }

    #[test]
    fn ties_go_to_first_occurrence() {
        let words = words_from_slice(&["bb", "aa", "dddd", "cccc"]);
        let stats = Statistics::compute(&words).unwrap();

        assert_eq!(stats.shortest_word.text(), "bb");
        assert_eq!(stats.longest_word.text(), "dddd");
    }

    #[test]
    fn distribution_sums_to_total() {
        let words = crate::wordlists::WordStore::fallback();
        let stats = Statistics::compute(words.words()).unwrap();

        let sum: usize = stats.length_distribution.values().sum();
        assert_eq!(sum, stats.total_words);

        let letters: usize = words.words().iter().map(Word::len).sum();
        assert!((stats.average_length - letters as f64 / words.len() as f64).abs() < 1e-9);
    }
}
