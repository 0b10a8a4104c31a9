//! Symbol matrix: the token stream framed into rows of the repeat period.
//!
//! Tokens are read one at a time. Orientation alternates per token starting
//! row-wise, and every `period` tokens a new row begins, so column `c` of each
//! row holds the token enciphered at key position `c`.
//!
//! Reading stops early once the period hypothesis stops explaining the data:
//! if the column just written has matched the same earlier row a threshold
//! number of consecutive times, the loop detector fires and the (possibly
//! short) current row becomes the last row.
//!
//! # Examples
//!
//! ```
//! use pairgraph::{Matrix, MatrixConfig, StopReason};
//!
//! let config = MatrixConfig::new(2)?;
//! let build = Matrix::build("AB CD AB CD AB CD".split_whitespace(), &config)?;
//!
//! assert_eq!(build.stop, StopReason::LoopDetected { row: 2, column: 0 });
//! assert_eq!(build.matrix.row_count(), 3);
//! assert_eq!(build.tokens_read, 5);
//! # Ok::<(), pairgraph::Error>(())
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::symbol::{Orientation, Symbol};

/// Consecutive matches against one earlier row that end reading.
pub const DEFAULT_LOOP_THRESHOLD: usize = 3;

/// Parameters of a matrix build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    period: usize,
    loop_threshold: usize,
}

impl MatrixConfig {
    /// Configuration for the given period with the default loop threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPeriod`] if `period` is zero.
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(Error::InvalidPeriod);
        }
        Ok(Self {
            period,
            loop_threshold: DEFAULT_LOOP_THRESHOLD,
        })
    }

    /// Replaces the loop threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] if `threshold` is zero.
    pub fn with_loop_threshold(self, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(Self {
            loop_threshold: threshold,
            ..self
        })
    }

    /// Row width.
    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Consecutive matches that fire the loop detector.
    #[must_use]
    pub fn loop_threshold(&self) -> usize {
        self.loop_threshold
    }
}

/// Why a matrix build stopped reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum StopReason {
    /// The token source ran dry.
    Exhausted,
    /// The loop detector fired on the symbol at this position.
    LoopDetected {
        /// Row of the symbol that completed the run of matches.
        row: usize,
        /// Column of that symbol.
        column: usize,
    },
}

/// Rows of symbols. Every row but the last has exactly `period` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Matrix {
    rows: Vec<Vec<Symbol>>,
}

/// Result of [`Matrix::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixBuild {
    /// The framed symbols.
    pub matrix: Matrix,
    /// Why reading stopped.
    pub stop: StopReason,
    /// Tokens taken from the source, including the one that fired the detector.
    pub tokens_read: usize,
}

impl Matrix {
    /// Frames a token stream into rows of `config.period()` symbols.
    ///
    /// Tokens after the one that fires the loop detector are never pulled
    /// from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] if a token is not two characters.
    pub fn build<I>(tokens: I, config: &MatrixConfig) -> Result<MatrixBuild>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let period = config.period();
        let mut rows: Vec<Vec<Symbol>> = vec![Vec::new()];
        let mut detector = LoopDetector::new(config.loop_threshold());
        let mut orientation = Orientation::RowWise;
        let mut row = 0;
        let mut tokens_read = 0;
        let mut stop = StopReason::Exhausted;

        for token in tokens {
            let symbol = Symbol::from_token(token.as_ref(), orientation)?;
            tokens_read += 1;

            rows[row].push(symbol);
            let column = rows[row].len() - 1;
            if detector.observe(&rows, row, column) {
                debug!(row, column, %symbol, "loop detected, reading stopped");
                stop = StopReason::LoopDetected { row, column };
                break;
            }

            if rows[row].len() == period {
                rows.push(Vec::new());
                row += 1;
            }

            orientation = orientation.flip();
        }

        Ok(MatrixBuild {
            matrix: Matrix { rows },
            stop,
            tokens_read,
        })
    }

    /// All rows in reading order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Symbol>] {
        &self.rows
    }

    /// Number of rows, counting a trailing empty row.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row; the column range scanned for adjacency.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Symbol at `(row, column)`, if present.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&Symbol> {
        self.rows.get(row)?.get(column)
    }

    /// Symbols found at `column` in every row long enough to have one.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Symbol> + '_ {
        self.rows.iter().filter_map(move |row| row.get(column))
    }

    /// Every symbol, row by row.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.rows.iter().flatten()
    }

    /// Total number of symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Per-earlier-row run lengths of column matches for one build.
///
/// Counters persist across columns and rows: a counter only resets when its
/// row mismatches, so a run can span a row boundary.
#[derive(Debug)]
struct LoopDetector {
    runs: Vec<usize>,
    threshold: usize,
}

impl LoopDetector {
    fn new(threshold: usize) -> Self {
        Self {
            runs: Vec::new(),
            threshold,
        }
    }

    /// Updates the runs for the symbol at `(row, column)` and reports whether
    /// any of them reached the threshold.
    fn observe(&mut self, rows: &[Vec<Symbol>], row: usize, column: usize) -> bool {
        if row == 0 {
            return false;
        }
        let Some(current) = rows[row].get(column) else {
            return false;
        };

        self.runs.resize(row, 0);
        for (run, earlier) in self.runs.iter_mut().zip(rows) {
            if earlier.get(column) == Some(current) {
                *run += 1;
            } else {
                *run = 0;
            }
        }

        self.runs.iter().any(|&run| run >= self.threshold)
    }
}
