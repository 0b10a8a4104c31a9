//! JSON documents for the two pipelines.
//!
//! Both documents open with a `symbols` array in id order, so the row `i` of
//! any matrix in the document belongs to `symbols[i]`:
//!
//! ```json
//! {
//!   "symbols": [{ "id": 0, "symbol": "AB0", "first": "A", "second": "B",
//!                 "orientation": "row_wise" }],
//!   "adjacency": [[true]]
//! }
//! ```

use serde_json::{json, Value};

use crate::adjacency::AdjacencyMatrix;
use crate::frequency::FrequencyTable;
use crate::index::SymbolIndex;
use crate::matrix::MatrixBuild;

/// Matrix, catalogue and adjacency relation of one build.
#[must_use]
pub fn to_adjacency_json(
    build: &MatrixBuild,
    index: &SymbolIndex,
    adjacency: &AdjacencyMatrix,
) -> Value {
    let rows: Vec<Vec<bool>> = adjacency.rows().map(<[bool]>::to_vec).collect();
    json!({
        "symbols": symbols(index),
        "matrix": build.matrix,
        "stop": build.stop,
        "tokens_read": build.tokens_read,
        "adjacency": rows
    })
}

/// Catalogue, raw counts and distributions of a frequency table.
#[must_use]
pub fn to_frequency_json(table: &FrequencyTable) -> Value {
    json!({
        "symbols": symbols(table.index()),
        "counts": table.counts(),
        "frequencies": table.distributions()
    })
}

fn symbols(index: &SymbolIndex) -> Value {
    let entries: Vec<Value> = index
        .iter()
        .map(|(id, symbol)| {
            json!({
                "id": id,
                "symbol": symbol.to_string(),
                "first": symbol.first(),
                "second": symbol.second(),
                "orientation": symbol.orientation()
            })
        })
        .collect();
    Value::Array(entries)
}
