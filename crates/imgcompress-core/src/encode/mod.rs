//! Image encoding.
//!
//! Each [`OutputFormat`] is served by an [`Encoder`] looked up in an
//! [`EncoderRegistry`]; the pipeline never switches on format names itself.
//!
//! - JPEG: quality clamped to 1-100, alpha composited onto black
//! - PNG: best compression, quality ignored
//!
//! # Examples
//!
//! ```ignore
//! use imgcompress_core::encode::{encode_jpeg, encode_png};
//!
//! let jpeg_bytes = encode_jpeg(&raster, 90).unwrap();
//! let png_bytes = encode_png(&raster).unwrap();
//! ```

mod jpeg;
mod png;

use std::collections::HashMap;

use thiserror::Error;

use crate::options::OutputFormat;
use crate::raster::Raster;

pub use jpeg::{encode_jpeg, JpegEncoder};
pub use png::{encode_png, PngEncoder};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The raster has no pixels to encode.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    EmptyImage { width: u32, height: u32 },

    /// The underlying encoder failed.
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed { format: OutputFormat, reason: String },
}

impl EncodeError {
    pub(crate) fn from_image(format: OutputFormat, err: image::ImageError) -> Self {
        EncodeError::EncodingFailed {
            format,
            reason: err.to_string(),
        }
    }
}

/// Encoder parameters shared by all formats. Each encoder reads what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeSettings {
    /// Lossy quality, JPEG only.
    pub quality: i32,
}

/// An encoder for one output format.
pub trait Encoder: Send + Sync {
    /// The format this encoder produces.
    fn format(&self) -> OutputFormat;

    /// Encode a raster into a complete file in memory.
    fn encode(&self, raster: &Raster, settings: &EncodeSettings) -> Result<Vec<u8>, EncodeError>;
}

/// Mapping from output format to its encoder.
pub struct EncoderRegistry {
    encoders: HashMap<OutputFormat, Box<dyn Encoder>>,
}

impl EncoderRegistry {
    /// Create a registry with no encoders.
    pub fn empty() -> Self {
        Self {
            encoders: HashMap::new(),
        }
    }

    /// Register an encoder, replacing any existing one for the same format.
    pub fn register<E: Encoder + 'static>(&mut self, encoder: E) -> &mut Self {
        self.encoders.insert(encoder.format(), Box::new(encoder));
        self
    }

    /// Look up the encoder for `format`.
    pub fn get(&self, format: OutputFormat) -> Option<&dyn Encoder> {
        self.encoders.get(&format).map(|e| e.as_ref())
    }

    /// Returns true if an encoder is registered for `format`.
    pub fn supports(&self, format: OutputFormat) -> bool {
        self.encoders.contains_key(&format)
    }
}

impl Default for EncoderRegistry {
    /// Registry with the built-in JPEG and PNG encoders.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(JpegEncoder).register(PngEncoder);
        registry
    }
}

/// Reject rasters with nothing to encode.
fn ensure_not_empty(raster: &Raster) -> Result<(), EncodeError> {
    if raster.is_empty() {
        return Err(EncodeError::EmptyImage {
            width: raster.width(),
            height: raster.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = EncoderRegistry::default();
        assert!(registry.supports(OutputFormat::Jpeg));
        assert!(registry.supports(OutputFormat::Png));
        assert_eq!(
            registry.get(OutputFormat::Png).map(|e| e.format()),
            Some(OutputFormat::Png)
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = EncoderRegistry::empty();
        assert!(registry.get(OutputFormat::Jpeg).is_none());
        assert!(!registry.supports(OutputFormat::Png));
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::EmptyImage {
            width: 0,
            height: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (0) must be non-zero"
        );

        let err = EncodeError::EncodingFailed {
            format: OutputFormat::Jpeg,
            reason: "too large".to_string(),
        };
        assert_eq!(err.to_string(), "jpeg encoding failed: too large");
    }
}
