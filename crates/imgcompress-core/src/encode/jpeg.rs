//! JPEG encoding.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! JPEG has no alpha channel, so RGBA rasters are composited onto black before
//! encoding; luminance rasters are written as single-channel JPEG.

use image::codecs::jpeg;
use image::{ExtendedColorType, ImageEncoder};

use crate::luminance::premultiply;
use crate::options::OutputFormat;
use crate::raster::{Pixels, Raster};

use super::{ensure_not_empty, EncodeError, EncodeSettings, Encoder};

/// Lowest quality the encoder accepts.
pub const MIN_QUALITY: i32 = 1;

/// Highest quality the encoder accepts.
pub const MAX_QUALITY: i32 = 100;

/// JPEG encoder driven by [`EncodeSettings::quality`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegEncoder;

impl Encoder for JpegEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Jpeg
    }

    fn encode(&self, raster: &Raster, settings: &EncodeSettings) -> Result<Vec<u8>, EncodeError> {
        encode_jpeg(raster, settings.quality)
    }
}

/// Encode a raster to JPEG bytes.
///
/// # Quality
///
/// Values outside 1-100 are clamped into range, so the default quality of 0
/// encodes at quality 1.
///
/// # Errors
///
/// Returns `EncodeError::EmptyImage` for a zero-area raster and
/// `EncodeError::EncodingFailed` if the encoder rejects the image (for example
/// dimensions beyond 65535).
pub fn encode_jpeg(raster: &Raster, quality: i32) -> Result<Vec<u8>, EncodeError> {
    ensure_not_empty(raster)?;

    let quality = quality.clamp(MIN_QUALITY, MAX_QUALITY) as u8;
    let (width, height) = raster.dimensions();

    let mut buffer = Vec::new();
    let encoder = jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);

    let result = match raster.pixels() {
        Pixels::Luma(img) => encoder.write_image(img.as_raw(), width, height, ExtendedColorType::L8),
        Pixels::Rgba(img) => {
            let rgb = flatten_onto_black(img.as_raw());
            encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        }
    };
    result.map_err(|e| EncodeError::from_image(OutputFormat::Jpeg, e))?;

    log::debug!(
        "Encoded {}x{} JPEG at quality {}: {} bytes",
        width,
        height,
        quality,
        buffer.len()
    );
    Ok(buffer)
}

/// Drop the alpha channel of packed RGBA data, compositing onto black.
fn flatten_onto_black(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let a = px[3];
        rgb.extend_from_slice(&[
            premultiply(px[0], a),
            premultiply(px[1], a),
            premultiply(px[2], a),
        ]);
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
