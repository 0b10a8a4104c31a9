//! Analytic structures for periodic pair-substitution ciphers.
//!
//! Ciphertext of a digraph cipher keyed by a repeating period is a stream of
//! two-character tokens. Framing that stream into rows of the period length
//! lines up tokens enciphered under the same key position, and this crate
//! builds the structures a cryptanalyst reads off that framing:
//!
//! - a [`Matrix`] of [`Symbol`]s (token plus the orientation it was read in),
//! - a [`SymbolIndex`] assigning each distinct symbol a dense id,
//! - an [`AdjacencyMatrix`] relating symbols that share a column,
//! - given aligned plaintext, a [`FrequencyTable`] of letter distributions.
//!
//! # Entry Point
//!
//! ```
//! use pairgraph::{AdjacencyMatrix, Matrix, MatrixConfig, SymbolIndex};
//!
//! let config = MatrixConfig::new(2)?;
//! let build = Matrix::build("AB CD AB EF AB CD".split_whitespace(), &config)?;
//! let index = SymbolIndex::from_matrix(&build.matrix);
//! let adjacency = AdjacencyMatrix::build(&build.matrix, &index);
//!
//! assert_eq!(index.len(), 3);
//! assert!(adjacency.get(1, 2));
//! assert!(!adjacency.get(0, 1));
//! # Ok::<(), pairgraph::Error>(())
//! ```
//!
//! # Frequencies
//!
//! ```
//! use pairgraph::FrequencyTable;
//!
//! let table = FrequencyTable::build("AB CD AB".split_whitespace(), "t-h-t".chars())?;
//! assert_eq!(table.most_likely(0), Some('t'));
//! # Ok::<(), pairgraph::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod adjacency;
pub mod error;
pub mod frequency;
pub mod index;
pub mod matrix;
pub mod serializer;
pub mod symbol;

pub use adjacency::AdjacencyMatrix;
pub use error::{Error, Result};
pub use frequency::{FrequencyTable, ALPHABET_LEN};
pub use index::SymbolIndex;
pub use matrix::{Matrix, MatrixBuild, MatrixConfig, StopReason, DEFAULT_LOOP_THRESHOLD};
pub use symbol::{Orientation, Symbol};
