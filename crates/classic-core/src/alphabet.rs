//! Ordered symbol sets.

use crate::error::CipherError;

/// Ordered, duplicate-free set of lower-case symbols.
///
/// Iteration order is the canonical rank of each symbol; key matrices append
/// unused symbols in this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from `symbols`, lower-casing each one.
    ///
    /// Fails on an empty input or on a symbol that appears twice.
    pub fn new(symbols: &str) -> Result<Self, CipherError> {
        let mut out: Vec<char> = Vec::with_capacity(symbols.len());
        for c in symbols.chars().flat_map(char::to_lowercase) {
            if out.contains(&c) {
                return Err(CipherError::DuplicateSymbol(c));
            }
            out.push(c);
        }
        if out.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        Ok(Self { symbols: out })
    }

    /// The 25-letter Latin alphabet with `j` merged into `i`.
    pub fn latin25() -> Self {
        Self {
            symbols: "abcdefghiklmnopqrstuvwxyz".chars().collect(),
        }
    }

    /// The 26 Latin letters followed by the ten ASCII digits.
    pub fn alphanumeric36() -> Self {
        Self {
            symbols: "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect(),
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in canonical order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns true if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Canonical rank of `symbol`, if present.
    pub fn rank(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    /// True when the alphabet stores `j` as `i`.
    pub fn folds_j(&self) -> bool {
        !self.contains('j') && self.contains('i')
    }

    /// Applies the alphabet's letter merge (`j` → `i` where applicable).
    pub fn fold(&self, symbol: char) -> char {
        if symbol == 'j' && self.folds_j() {
            'i'
        } else {
            symbol
        }
    }

    /// Grid shape as `(rows, columns)`.
    ///
    /// Rows is the largest divisor of the length not exceeding its square root,
    /// so 25 symbols give 5×5 and 36 give 6×6.
    pub fn grid_shape(&self) -> (usize, usize) {
        let n = self.symbols.len();
        let mut rows = 1;
        let mut candidate = 1;
        while candidate * candidate <= n {
            if n % candidate == 0 {
                rows = candidate;
            }
            candidate += 1;
        }
        (rows, n / rows)
    }
}
