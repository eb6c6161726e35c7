//! Error types for symbol generation and rendering.

use thiserror::Error;

/// Broad category of an [`EncodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed unusable input
    Input,
    /// The payload does not fit any tabulated version
    Capacity,
    /// An internal consistency check failed
    Internal,
}

/// Errors returned while building a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The payload is empty.
    #[error("payload is empty")]
    EmptyPayload,

    /// The payload plus header overhead exceeds the largest capacity.
    #[error("payload too long: {len} bytes, at most {max} fit")]
    PayloadTooLong {
        /// Payload length in bytes
        len: usize,
        /// Largest payload length any version accepts
        max: usize,
    },

    /// Grid dimensions disagree with the computed symbol size.
    #[error("grid size mismatch: expected {expected}, got {modules}/{function}")]
    GridMismatch {
        /// Size derived from the version
        expected: usize,
        /// Module grid height
        modules: usize,
        /// Function grid height
        function: usize,
    },
}

impl EncodeError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::EmptyPayload => ErrorKind::Input,
            EncodeError::PayloadTooLong { .. } => ErrorKind::Capacity,
            EncodeError::GridMismatch { .. } => ErrorKind::Internal,
        }
    }
}

/// Errors returned by the image renderers.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The symbol has not finished generating.
    #[error("symbol is incomplete")]
    Incomplete,

    /// Image encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
