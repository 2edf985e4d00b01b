//! Column read order derived from a transposition key.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Permutation of `0..key_len` listing column indices in read order.
///
/// Columns are read in ascending order of their key letter; equal letters keep
/// their left-to-right order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnarOrder {
    order: Vec<usize>,
}

impl ColumnarOrder {
    /// Derives the order from `key`.
    ///
    /// The key is lower-cased, stripped of diacritics and reduced to alphabetic
    /// characters. An empty result yields an empty order.
    pub fn build(key: &str) -> Self {
        let letters: Vec<char> = key
            .chars()
            .flat_map(char::to_lowercase)
            .nfd()
            .filter(|c| !is_combining_mark(*c) && c.is_alphabetic())
            .collect();
        let mut pairs: Vec<(char, usize)> = letters.into_iter().zip(0..).collect();
        // Stable: ties keep index order.
        pairs.sort_by_key(|&(c, _)| c);
        Self {
            order: pairs.into_iter().map(|(_, idx)| idx).collect(),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true for a key with no usable letters.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Column indices in read order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Rank of each original column in the read order.
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.order.len()];
        for (rank, &col) in self.order.iter().enumerate() {
            ranks[col] = rank;
        }
        ranks
    }
}
