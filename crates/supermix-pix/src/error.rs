//! Error types for PIX code generation.

use supermix_pix_core::DecodeError;
use thiserror::Error;

use crate::qr::QrError;
use crate::validation::ValidationError;

/// Errors that can occur while generating or checking a PIX code.
#[derive(Debug, Error)]
pub enum PixError {
    /// Input rejected before building.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// QR rendering failed.
    #[error("QR error: {0}")]
    Qr(#[from] QrError),

    /// A payload could not be read back.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type for PIX operations.
pub type Result<T> = std::result::Result<T, PixError>;
