//! Error types for identifier operations.
//!
//! This module provides the [`IdentifierError`] type shared by the ISBN codec
//! and the call-number normalizer, and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all identifier operations.
///
/// Every validation and conversion in this crate is total: malformed input is
/// reported through one of these variants and never panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input does not have the expected shape, length, prefix, or characters.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The input has the expected shape but its check character is wrong.
    #[error("Checksum mismatch: {0}")]
    ChecksumMismatch(String),

    /// A strict conversion was given a value that is only valid in the target format.
    #[error("Unexpected format: {0}")]
    UnexpectedFormat(String),

    /// The cleaned call number does not look like a call number.
    #[error("Invalid call number: {0}")]
    InvalidCallNumber(String),

    /// The call-number parser rejected its input.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience type alias for [`std::result::Result`] with [`IdentifierError`].
pub type Result<T> = std::result::Result<T, IdentifierError>;
