//! Property-based tests for the matrix, index, adjacency and frequency
//! builders.
//!
//! Token streams are drawn from a small alphabet so that repeated symbols,
//! column matches and loop detection all show up in generated cases.

use std::collections::HashSet;

use pairgraph::{
    AdjacencyMatrix, FrequencyTable, Matrix, MatrixConfig, StopReason, Symbol, SymbolIndex,
};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[A-D][A-D]"
}

fn stream(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), 0..max)
}

fn build(tokens: &[String], period: usize) -> Matrix {
    let config = match MatrixConfig::new(period) {
        Ok(config) => config,
        Err(e) => unreachable!("period {period} rejected: {e}"),
    };
    match Matrix::build(tokens, &config) {
        Ok(build) => build.matrix,
        Err(e) => unreachable!("generated tokens are well formed: {e}"),
    }
}

// =============================================================================
// Matrix framing
// =============================================================================

proptest! {
    /// A stream of pairwise distinct tokens never matches, so it is read to
    /// the end and framed into full rows.
    #[test]
    fn prop_distinct_tokens_read_fully(
        tokens in prop::collection::hash_set("[A-Z][a-z]", 0..120),
        period in 1usize..12,
    ) {
        let tokens: Vec<String> = tokens.into_iter().collect();
        let config = MatrixConfig::new(period).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let build = Matrix::build(&tokens, &config).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(build.stop, StopReason::Exhausted);
        prop_assert_eq!(build.tokens_read, tokens.len());
        prop_assert_eq!(build.matrix.symbol_count(), tokens.len());

        let rows = build.matrix.rows();
        for row in &rows[..rows.len() - 1] {
            prop_assert_eq!(row.len(), period);
        }
        prop_assert!(rows[rows.len() - 1].len() < period);
    }

    /// Whatever the stream, only the last row may be short, and a loop stop
    /// always lands on the last symbol written.
    #[test]
    fn prop_only_last_row_short(tokens in stream(200), period in 1usize..9) {
        let config = MatrixConfig::new(period).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let build = Matrix::build(&tokens, &config).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let rows = build.matrix.rows();

        prop_assert!(!rows.is_empty());
        for row in &rows[..rows.len() - 1] {
            prop_assert_eq!(row.len(), period);
        }
        prop_assert!(build.tokens_read <= tokens.len());
        prop_assert_eq!(build.matrix.symbol_count(), build.tokens_read);

        if let StopReason::LoopDetected { row, column } = build.stop {
            prop_assert_eq!(row, rows.len() - 1);
            prop_assert_eq!(column, rows[row].len() - 1);
        } else {
            prop_assert_eq!(build.tokens_read, tokens.len());
        }
    }

    /// Repeating a row of distinct tokens under an even period (so
    /// orientations line up) fires on the third column of the repeat.
    #[test]
    fn prop_repeated_row_fires_on_third_match(
        (period, row) in (2usize..10)
            .prop_map(|half| half * 2)
            .prop_flat_map(|period| {
                (Just(period), prop::collection::hash_set("[A-Z][a-z]", period))
            }),
    ) {
        let row: Vec<String> = row.into_iter().collect();
        let tokens: Vec<String> = row.iter().chain(&row).chain(&row).cloned().collect();
        let config = MatrixConfig::new(period).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let build = Matrix::build(&tokens, &config).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(build.stop, StopReason::LoopDetected { row: 1, column: 2 });
        prop_assert_eq!(build.tokens_read, period + 3);
        prop_assert_eq!(build.matrix.row_count(), 2);
    }
}

// =============================================================================
// Index and adjacency
// =============================================================================

proptest! {
    /// Ids cover exactly `0..N`, one per distinct symbol.
    #[test]
    fn prop_index_is_bijection(tokens in stream(150), period in 1usize..9) {
        let matrix = build(&tokens, period);
        let index = SymbolIndex::from_matrix(&matrix);

        let distinct: HashSet<Symbol> = matrix.symbols().copied().collect();
        prop_assert_eq!(index.len(), distinct.len());

        let ids: HashSet<usize> = matrix.symbols().filter_map(|s| index.id(s)).collect();
        prop_assert_eq!(ids, (0..index.len()).collect::<HashSet<_>>());
    }

    /// Ids grow by at most one per symbol in row-major reading order.
    #[test]
    fn prop_ids_in_first_occurrence_order(tokens in stream(150), period in 1usize..9) {
        let matrix = build(&tokens, period);
        let index = SymbolIndex::from_matrix(&matrix);

        let mut next = 0;
        for symbol in matrix.symbols() {
            let id = index.id(symbol).ok_or_else(|| TestCaseError::fail("missing id"))?;
            prop_assert!(id <= next);
            if id == next {
                next += 1;
            }
        }
        prop_assert_eq!(next, index.len());
    }

    /// The relation is symmetric and reflexive on every scanned symbol.
    #[test]
    fn prop_adjacency_symmetric_with_diagonal(tokens in stream(150), period in 1usize..9) {
        let matrix = build(&tokens, period);
        let index = SymbolIndex::from_matrix(&matrix);
        let adjacency = AdjacencyMatrix::build(&matrix, &index);

        prop_assert_eq!(adjacency.dimension(), index.len());
        prop_assert!(adjacency.is_symmetric());
        for j in 0..index.len() {
            for k in 0..index.len() {
                prop_assert_eq!(adjacency.get(j, k), adjacency.get(k, j));
            }
        }
        for column in 0..matrix.width() {
            for symbol in matrix.column(column) {
                let id = index.id(symbol).ok_or_else(|| TestCaseError::fail("missing id"))?;
                prop_assert!(adjacency.get(id, id));
            }
        }
    }

    /// Two symbols sharing a column are adjacent.
    #[test]
    fn prop_column_mates_adjacent(tokens in stream(150), period in 1usize..9) {
        let matrix = build(&tokens, period);
        let index = SymbolIndex::from_matrix(&matrix);
        let adjacency = AdjacencyMatrix::build(&matrix, &index);

        for column in 0..matrix.width() {
            let ids: Vec<usize> = matrix.column(column).filter_map(|s| index.id(s)).collect();
            for &j in &ids {
                for &k in &ids {
                    prop_assert!(adjacency.get(j, k));
                }
            }
        }
    }
}

// =============================================================================
// Frequencies
// =============================================================================

proptest! {
    /// Rows sum to one and raw counts add up to the number of tokens.
    #[test]
    fn prop_frequency_rows_normalized(
        (tokens, plaintext) in stream(120).prop_flat_map(|tokens| {
            let n = tokens.len();
            (Just(tokens), prop::collection::vec("[a-zA-Z]|[ .,0-9]", n..n * 3 + 1))
        }),
    ) {
        let letters = plaintext
            .iter()
            .flat_map(|s| s.chars())
            .filter(char::is_ascii_alphabetic)
            .count();
        let result = FrequencyTable::build(&tokens, plaintext.iter().flat_map(|s| s.chars()));

        if letters < tokens.len() {
            prop_assert!(result.is_err());
            return Ok(());
        }
        let table = result.map_err(|e| TestCaseError::fail(e.to_string()))?;

        let total: u64 = table.counts().iter().flatten().map(|&c| u64::from(c)).sum();
        prop_assert_eq!(total, tokens.len() as u64);
        prop_assert!(table.degenerate_rows().is_empty());
        for row in table.distributions() {
            let sum: f64 = row.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "row sums to {}", sum);
        }
    }
}
