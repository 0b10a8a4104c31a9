//! `substitution-matrix` — Pairs ciphertext symbols with aligned plaintext and
//! writes, per symbol, the distribution of plaintext letters it stands for.
//!
//! **Outputs:**
//! - `<matrix-out>` — one row of 26 probabilities (a to z) per symbol id
//! - `<mapping-out>` — `<symbol> <id>` lines
//! - `--json <path>` — symbols, raw counts and distributions (optional)
//!
//! **Usage:**
//! ```
//! substitution-matrix <ciphertext> <plaintext> <matrix-out> <mapping-out>
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
use pairgraph::FrequencyTable;
use pairgraph_clients::{input, logging, writer, ClientConfig};
use tracing::warn;

/// Build per-symbol plaintext letter distributions.
#[derive(Parser)]
#[command(
    name = "substitution-matrix",
    about = "Build per-symbol plaintext letter distributions from aligned texts"
)]
struct Args {
    /// Ciphertext file of whitespace-separated two-character tokens.
    ciphertext: PathBuf,

    /// Plaintext file aligned letter by letter with the ciphertext.
    plaintext: PathBuf,

    /// Frequency matrix output file.
    matrix_out: PathBuf,

    /// Symbol mapping output file.
    mapping_out: PathBuf,

    /// TOML configuration file (only `[output]` is used).
    #[arg(long)]
    config: Option<PathBuf>,

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
    let ciphertext = input::read(&args.ciphertext)?;
    let plaintext = input::read(&args.plaintext)?;

    let table = FrequencyTable::build(input::tokens(&ciphertext), plaintext.chars())
        .with_context(|| {
            format!(
                "Failed to pair {} with {}",
                args.ciphertext.display(),
                args.plaintext.display()
            )
        })?;

    let degenerate = table.degenerate_rows();
    if !degenerate.is_empty() {
        warn!(?degenerate, "symbols without plaintext left as zero rows");
    }

    println!("{} symbols", table.len());

    writer::write(&args.matrix_out, &text::to_frequency_text(&table))?;
    writer::write(&args.mapping_out, &text::to_mapping_text(table.index()))?;

    if let Some(path) = args.json.or(config.output.json) {
        writer::write_json(&path, &json::to_frequency_json(&table))?;
    }

    Ok(())
}
