//! Column co-occurrence relation over symbol ids.
//!
//! Two symbols are adjacent when they sit in the same column of two rows
//! (a row counts against itself, so every scanned symbol is adjacent to
//! itself). Symbols sharing a column were enciphered under the same key
//! position, which is what makes the relation useful for grouping symbols
//! into classes.
//!
//! Only columns `0..matrix.width()` are scanned, where the width is the
//! length of the first row. Shorter later rows contribute nothing beyond
//! their own length.
//!
//! # Examples
//!
//! ```
//! use pairgraph::{AdjacencyMatrix, Matrix, MatrixConfig, SymbolIndex};
//!
//! let build = Matrix::build("AB CD AB EF".split_whitespace(), &MatrixConfig::new(2)?)?;
//! let index = SymbolIndex::from_matrix(&build.matrix);
//! let adjacency = AdjacencyMatrix::build(&build.matrix, &index);
//!
//! assert_eq!(adjacency.neighbours(1).collect::<Vec<_>>(), [1, 2]);
//! # Ok::<(), pairgraph::Error>(())
//! ```

use crate::index::SymbolIndex;
use crate::matrix::Matrix;

/// Square symmetric boolean matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    dimension: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Builds the relation for `matrix`, numbered by `index`.
    ///
    /// `index` must have been built from `matrix`; symbols missing from it
    /// contribute nothing.
    #[must_use]
    pub fn build(matrix: &Matrix, index: &SymbolIndex) -> Self {
        let dimension = index.len();
        let mut cells = vec![false; dimension * dimension];

        for column in 0..matrix.width() {
            let connected: Vec<usize> = matrix
                .column(column)
                .filter_map(|symbol| index.id(symbol))
                .collect();

            for &j in &connected {
                for &k in &connected {
                    cells[j * dimension + k] = true;
                }
            }
        }

        Self { dimension, cells }
    }

    /// Side length; equals the number of indexed symbols.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether ids `j` and `k` share a column. Out-of-range ids are never
    /// adjacent.
    #[must_use]
    pub fn get(&self, j: usize, k: usize) -> bool {
        j < self.dimension && k < self.dimension && self.cells[j * self.dimension + k]
    }

    /// Rows in id order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.dimension.max(1))
    }

    /// Ids adjacent to `id`, ascending. Includes `id` itself when it was
    /// scanned.
    pub fn neighbours(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.dimension).filter(move |&k| self.get(id, k))
    }

    /// Number of related unordered pairs, self pairs included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        (0..self.dimension)
            .map(|j| (j..self.dimension).filter(|&k| self.get(j, k)).count())
            .sum()
    }

    /// True if `get(j, k) == get(k, j)` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.dimension)
            .all(|j| (j + 1..self.dimension).all(|k| self.get(j, k) == self.get(k, j)))
    }
}
