//! Output files of the client binaries.
//!
//! Every output goes through [`write`], which makes sure the destination
//! directory exists and logs what landed where.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Creates the directory an output path lives in. A bare file name needs none.
fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("Could not create output directory {}", dir.display())),
        _ => Ok(()),
    }
}

/// Writes one rendered output.
///
/// # Errors
///
/// Returns an error naming `path` if its directory or the file itself cannot
/// be written.
pub fn write(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)
        .with_context(|| format!("Could not write output file {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "output written");
    Ok(())
}

/// Writes a JSON document, pretty-printed and newline-terminated.
///
/// # Errors
///
/// Returns an error if the document cannot be rendered or written.
pub fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    text.push('\n');
    write(path, &text)
}
