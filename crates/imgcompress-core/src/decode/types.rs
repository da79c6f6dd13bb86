//! Core types for image decoding.

use std::fmt;

use thiserror::Error;

use crate::raster::Raster;

/// Encoded formats the decoders can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InputFormat {
    Jpeg,
    Png,
}

impl InputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::Jpeg => "jpeg",
            InputFormat::Png => "png",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("Image data is empty")]
    Empty,

    /// The bytes match no registered decoder signature.
    #[error("Invalid or unsupported image format")]
    UnrecognizedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete {format} data: {reason}")]
    Corrupted { format: InputFormat, reason: String },

    /// Decoding would exceed the configured memory limits.
    #[error("Image too large to decode: {0}")]
    TooLarge(String),
}

impl DecodeError {
    /// Map an `image` crate error raised while decoding `format`.
    pub(crate) fn from_image(format: InputFormat, err: image::ImageError) -> Self {
        match err {
            image::ImageError::Limits(e) => DecodeError::TooLarge(e.to_string()),
            other => DecodeError::Corrupted {
                format,
                reason: other.to_string(),
            },
        }
    }
}

/// A decoded raster together with the format it was detected as.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub raster: Raster,
    pub format: InputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_display() {
        assert_eq!(InputFormat::Jpeg.to_string(), "jpeg");
        assert_eq!(InputFormat::Png.to_string(), "png");
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnrecognizedFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");

        let err = DecodeError::Corrupted {
            format: InputFormat::Png,
            reason: "unexpected EOF".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupted or incomplete png data: unexpected EOF"
        );
    }
}
