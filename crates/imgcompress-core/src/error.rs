//! Pipeline-level error type.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors returned by a pipeline invocation.
///
/// Every stage fails fast; the first error aborts the invocation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An option value is malformed (e.g. negative crop dimensions).
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The input bytes could not be decoded.
    #[error("Error decoding image: {0}")]
    Decode(#[from] DecodeError),

    /// The requested output format is not supported.
    #[error("Unsupported format {0}")]
    UnsupportedFormat(String),

    /// The encoder rejected the raster or its parameters.
    #[error("Error encoding image: {0}")]
    Encode(#[from] EncodeError),
}

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, TransformError>;
