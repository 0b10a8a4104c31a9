//! Client configuration file.
//!
//! ```toml
//! [matrix]
//! loop_threshold = 4
//!
//! [output]
//! json = "out/analysis.json"
//! matrix = "out/matrix.txt"
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pairgraph::{MatrixConfig, DEFAULT_LOOP_THRESHOLD};
use serde::Deserialize;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Matrix build parameters.
    pub matrix: MatrixSection,
    /// Extra output files.
    pub output: OutputSection,
}

/// `[matrix]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixSection {
    /// Consecutive column matches that stop reading.
    pub loop_threshold: Option<usize>,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// JSON document path.
    pub json: Option<PathBuf>,
    /// Symbol matrix text path.
    pub matrix: Option<PathBuf>,
}

impl ClientConfig {
    /// Parses configuration from TOML source.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid configuration")
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("In {}", path.display()))
    }

    /// Loads `path` if given, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the given file cannot be read or parsed.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Matrix parameters for `period`, with `threshold` overriding the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the period or threshold is zero.
    pub fn matrix_config(&self, period: usize, threshold: Option<usize>) -> Result<MatrixConfig> {
        let threshold = threshold
            .or(self.matrix.loop_threshold)
            .unwrap_or(DEFAULT_LOOP_THRESHOLD);
        let config = MatrixConfig::new(period)
            .and_then(|config| config.with_loop_threshold(threshold))
            .context("Invalid matrix parameters")?;
        Ok(config)
    }
}
