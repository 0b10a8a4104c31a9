//! Shared plumbing for the pairgraph client binaries.
//!
//! - [`config`]: optional TOML configuration file.
//! - [`input`]: reading ciphertext and plaintext files.
//! - [`logging`]: `tracing` subscriber setup.
//! - [`writer`]: writing rendered outputs to disk.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod input;
pub mod logging;
pub mod writer;

pub use config::ClientConfig;
