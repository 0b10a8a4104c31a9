//! Error type shared by every builder in the crate.

use thiserror::Error;

/// Failures that abort a build call. No partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A cipher token was not exactly two characters long.
    #[error("cipher token not of length 2: {token:?}")]
    MalformedToken {
        /// The offending token as read.
        token: String,
    },

    /// The plaintext ran out of letters before the ciphertext ran out of tokens.
    #[error("plaintext exhausted before cipher token {position}")]
    MisalignedInput {
        /// Zero-based position of the token left without a plaintext letter.
        position: usize,
    },

    /// The repeat period must be at least one token.
    #[error("period must be at least 1")]
    InvalidPeriod,

    /// The loop-detection threshold must be at least one match.
    #[error("loop threshold must be at least 1")]
    InvalidThreshold,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
