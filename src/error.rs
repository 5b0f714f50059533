//! Error types.

use thiserror::Error;

use crate::cli::ParseError;

/// Failure of a random bit source to deliver the requested bits.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid bit count {requested} (supported: 1..={max})")]
    InvalidBitCount { requested: u32, max: u32 },
    #[error("entropy source failed: {0}")]
    Entropy(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("no password met the composition rule after {0} attempts")]
    AttemptsExhausted(u64),
    #[error("password length {length} cannot cover {min} character groups")]
    InvalidLength { length: usize, min: usize },
    #[error(transparent)]
    Args(#[from] ParseError),
    #[error("clipboard: {0}")]
    Clipboard(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
