//! Reading ciphertext and plaintext files.
//!
//! Ciphertext files hold whitespace-separated two-character tokens; line
//! breaks carry no meaning. Plaintext files are read verbatim and filtered by
//! the frequency builder.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a whole input file as UTF-8.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Could not open input file {}", path.display()))
}

/// Splits ciphertext into tokens.
pub fn tokens(ciphertext: &str) -> impl Iterator<Item = &str> + '_ {
    ciphertext.split_whitespace()
}
