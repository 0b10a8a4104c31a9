//! Whitespace-separated text formats.
//!
//! ```text
//! adjacency   1 0 0         mapping   AB0 0      frequencies   0.5 0 0.5 ...
//!             0 1 1                   CD1 1
//!             0 1 1                   EF1 2
//! ```
//!
//! Every value is followed by a single space and every row by a newline.
//! Floats use Rust's shortest round-trip form, so parsing the text back
//! yields the same `f64` bits.

use core::fmt::Write;

use crate::adjacency::AdjacencyMatrix;
use crate::frequency::FrequencyTable;
use crate::index::SymbolIndex;
use crate::matrix::Matrix;

/// Adjacency rows as `1`/`0` entries.
#[must_use]
pub fn to_adjacency_text(adjacency: &AdjacencyMatrix) -> String {
    let n = adjacency.dimension();
    let mut out = String::with_capacity(n * (2 * n + 1));
    for row in adjacency.rows() {
        for &related in row {
            out.push(if related { '1' } else { '0' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// One `<symbol> <id>` line per symbol, in id order.
#[must_use]
pub fn to_mapping_text(index: &SymbolIndex) -> String {
    let mut out = String::with_capacity(index.len() * 8);
    for (id, symbol) in index.iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{symbol} {id}");
    }
    out
}

/// Normalized distribution rows in id order.
#[must_use]
pub fn to_frequency_text(table: &FrequencyTable) -> String {
    let mut out = String::new();
    for row in table.distributions() {
        for value in row {
            // Writing to a String cannot fail.
            let _ = write!(out, "{value} ");
        }
        out.push('\n');
    }
    out
}

/// Matrix rows as space-separated symbols. A trailing empty row renders as
/// an empty line.
#[must_use]
pub fn to_matrix_text(matrix: &Matrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::matrix::MatrixConfig;

    fn worked_example() -> Result<(Matrix, SymbolIndex, AdjacencyMatrix)> {
        let build = Matrix::build(
            "AB CD AB EF AB CD".split_whitespace(),
            &MatrixConfig::new(2)?,
        )?;
        let index = SymbolIndex::from_matrix(&build.matrix);
        let adjacency = AdjacencyMatrix::build(&build.matrix, &index);
        Ok((build.matrix, index, adjacency))
    }

    #[test]
    fn adjacency_text() -> Result<()> {
        let (_, _, adjacency) = worked_example()?;
        assert_eq!(to_adjacency_text(&adjacency), "1 0 0 \n0 1 1 \n0 1 1 \n");
        Ok(())
    }

    #[test]
    fn mapping_text() -> Result<()> {
        let (_, index, _) = worked_example()?;
        assert_eq!(to_mapping_text(&index), "AB0 0\nCD1 1\nEF1 2\n");
        Ok(())
    }

    #[test]
    fn matrix_text() -> Result<()> {
        let (matrix, _, _) = worked_example()?;
        assert_eq!(
            to_matrix_text(&matrix),
            "AB0 CD1\nAB0 EF1\nAB0 CD1\n\n"
        );
        Ok(())
    }

    #[test]
    fn frequency_text_round_trips() -> Result<()> {
        let table = FrequencyTable::build("AB CD AB CD AB".split_whitespace(), "abcab".chars())?;
        let text = to_frequency_text(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: Vec<f64> = lines[0]
            .split_whitespace()
            .filter_map(|v| v.parse().ok())
            .collect();
        assert_eq!(parsed.len(), 26);
        assert_eq!(parsed.as_slice(), table.distributions()[0].as_slice());
        Ok(())
    }

    #[test]
    fn empty_outputs() {
        let index = SymbolIndex::new();
        assert_eq!(to_mapping_text(&index), "");
    }
}
