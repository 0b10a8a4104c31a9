//! `pairgraph` — Frames ciphertext into rows of the repeat length and writes the
//! column co-occurrence graph of its symbols.
//!
//! **Outputs:**
//! - `<adjacency-out>` — one row of `1`/`0` entries per symbol id
//! - `<mapping-out>` — `<symbol> <id>` lines, symbols written as pair plus
//!   orientation (`AB0` row-wise, `AB1` column-wise)
//! - `--matrix <path>` — the framed symbol matrix (optional)
//! - `--json <path>` — everything above as one JSON document (optional)
//!
//! **Usage:**
//! ```
//! pairgraph <input> <repeat-length> <adjacency-out> <mapping-out> [--config <toml>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pairgraph::serializer::{json, text};
use pairgraph::{AdjacencyMatrix, Matrix, StopReason, SymbolIndex};
use pairgraph_clients::{input, logging, writer, ClientConfig};
use tracing::info;

/// Build the symbol co-occurrence graph of a periodic pair cipher.
#[derive(Parser)]
#[command(
    name = "pairgraph",
    about = "Build the symbol co-occurrence graph of a periodic pair cipher"
)]
struct Args {
    /// Ciphertext file of whitespace-separated two-character tokens.
    input: PathBuf,

    /// Repeat length (tokens per row).
    repeat_length: usize,

    /// Adjacency matrix output file.
    adjacency_out: PathBuf,

    /// Symbol mapping output file.
    mapping_out: PathBuf,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Consecutive column matches that stop reading (default 3).
    #[arg(long)]
    loop_threshold: Option<usize>,

    /// Also write the symbol matrix here.
    #[arg(long)]
    matrix: Option<PathBuf>,

    /// Also write a JSON document here.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = ClientConfig::load_optional(args.config.as_deref())?;
    let matrix_config = config.matrix_config(args.repeat_length, args.loop_threshold)?;
    info!(
        period = matrix_config.period(),
        loop_threshold = matrix_config.loop_threshold(),
        "building symbol matrix"
    );

    let ciphertext = input::read(&args.input)?;
    let build = Matrix::build(input::tokens(&ciphertext), &matrix_config)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let index = SymbolIndex::from_matrix(&build.matrix);
    let adjacency = AdjacencyMatrix::build(&build.matrix, &index);

    println!(
        "{} tokens in {} rows of {}: {} symbols, {} related pairs",
        build.tokens_read,
        build.matrix.row_count(),
        matrix_config.period(),
        index.len(),
        adjacency.edge_count()
    );
    if let StopReason::LoopDetected { row, column } = build.stop {
        println!("  Loop detected at row {row}, column {column}; rest of input ignored");
    }

    writer::write(&args.adjacency_out, &text::to_adjacency_text(&adjacency))?;
    writer::write(&args.mapping_out, &text::to_mapping_text(&index))?;

    if let Some(path) = args.matrix.or(config.output.matrix) {
        writer::write(&path, &text::to_matrix_text(&build.matrix))?;
    }
    if let Some(path) = args.json.or(config.output.json) {
        writer::write_json(&path, &json::to_adjacency_json(&build, &index, &adjacency))?;
    }

    Ok(())
}
