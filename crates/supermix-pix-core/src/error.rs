//! Error types for reading payloads back.
//!
//! Building a payload cannot fail; only decoding has an error type.

use thiserror::Error;

/// Errors that can occur while decoding a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("payload truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("invalid length prefix {prefix:?} at offset {offset}")]
    InvalidLength { offset: usize, prefix: String },

    #[error("invalid tag {tag:?} at offset {offset}")]
    InvalidTag { offset: usize, tag: String },

    #[error("payload does not end with a CRC field")]
    MissingCrc,

    #[error("CRC mismatch: payload carries {actual}, computed {expected}")]
    CrcMismatch { expected: String, actual: String },

    #[error("missing field {0}")]
    MissingField(String),
}
