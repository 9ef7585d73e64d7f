//! Error types for the phrase14 library

use thiserror::Error;

/// Custom error type for phrase14 operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid entropy: {0}")]
    InvalidEntropy(String),

    #[error("Invalid word count: expected 14 words, got {0}")]
    InvalidWordCount(usize),

    #[error("Unknown word: {0}")]
    UnknownWord(String),

    /// Normal rejection of a tampered or mistyped phrase during decode.
    #[error("Checksum mismatch")]
    ChecksumMismatch,

    /// A freshly encoded phrase failed its own checksum self-check.
    /// Signals a codec bug rather than bad caller input.
    #[error("Internal checksum mismatch")]
    InternalChecksumMismatch,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for phrase14 operations
pub type Result<T> = std::result::Result<T, Error>;
