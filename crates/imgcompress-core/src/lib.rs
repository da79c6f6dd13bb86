//! imgcompress core - image transformation pipeline
//!
//! This crate decodes JPEG/PNG bytes, optionally crops, converts to grayscale
//! and resizes the image, then re-encodes it as JPEG or PNG.
//!
//! # Pipeline
//!
//! ```text
//! bytes -> decode -> [crop] -> [grayscale] -> [resize] -> encode -> bytes
//! ```
//!
//! The transform order is fixed regardless of which steps are requested.
//! Everything runs synchronously on the calling thread.
//!
//! # Example
//!
//! ```ignore
//! use imgcompress_core::{transform_image, CropRegion, OutputFormat, TransformOptions};
//!
//! let options = TransformOptions::new(OutputFormat::Jpeg)
//!     .with_quality(80)
//!     .with_crop(CropRegion::new(0, 0, 800, 800))
//!     .with_grayscale(true)
//!     .with_size(400, 0);
//! let jpeg = transform_image(&png_bytes, &options)?;
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod luminance;
pub mod options;
pub mod pipeline;
pub mod raster;
pub mod transform;

pub use decode::{DecodeError, DecodedImage, InputFormat};
pub use encode::EncodeError;
pub use error::TransformError;
pub use geometry::{Point, Rect};
pub use options::{CropRegion, OutputFormat, RawOptions, TransformOptions};
pub use pipeline::{transform_image, Pipeline, TransformOutput};
pub use raster::{ColorModel, Raster};
pub use transform::{apply_crop, apply_grayscale, apply_resize, FilterType};

/// Parse a host options record and run the default pipeline.
///
/// This is the single entry point host bindings need: format parsing and
/// option validation happen here, before the input is decoded.
pub fn process(bytes: &[u8], raw: RawOptions) -> Result<Vec<u8>, TransformError> {
    let options = TransformOptions::try_from(raw)?;
    transform_image(bytes, &options)
}
