//! Keyed symbol grids.

use core::fmt;

use crate::alphabet::Alphabet;
use crate::normalize::fold_key;

/// Row-major grid holding every alphabet symbol exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMatrix {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
    folds_j: bool,
}

impl KeyMatrix {
    /// Builds the grid for `key` over `alphabet`.
    ///
    /// The folded key is de-duplicated in first-occurrence order, the rest of the
    /// alphabet follows in canonical order, and the result is cut into rows of
    /// the alphabet's grid width.
    pub fn build(key: &str, alphabet: &Alphabet) -> Self {
        let mut cells: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in fold_key(key, alphabet) {
            if !cells.contains(&c) {
                cells.push(c);
            }
        }
        for &c in alphabet.symbols() {
            if !cells.contains(&c) {
                cells.push(c);
            }
        }
        let (rows, cols) = alphabet.grid_shape();
        Self {
            cells,
            rows,
            cols,
            folds_j: alphabet.folds_j(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Symbol at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> char {
        assert!(row < self.rows && col < self.cols, "coordinate out of range");
        self.cells[row * self.cols + col]
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterates rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols)
    }

    /// All symbols in row-major order.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Coordinates of `symbol`, merging `j` into `i` where the alphabet does.
    ///
    /// Returns `None` for symbols outside the alphabet.
    pub fn locate(&self, symbol: char) -> Option<(usize, usize)> {
        let symbol = if self.folds_j && symbol == 'j' { 'i' } else { symbol };
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|idx| (idx / self.cols, idx % self.cols))
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c.to_uppercase())?;
            }
        }
        Ok(())
    }
}
