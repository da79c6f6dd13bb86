//! JPEG decoding.

use std::io::Cursor;

use crate::raster::Raster;

use super::{decode_with, DecodeError, Decoder, InputFormat};

/// SOI marker followed by the first segment marker.
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Baseline and progressive JPEG decoder.
///
/// EXIF orientation is not applied; pixels are returned as stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegDecoder;

impl Decoder for JpegDecoder {
    fn format(&self) -> InputFormat {
        InputFormat::Jpeg
    }

    fn matches(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(JPEG_SIGNATURE)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Raster, DecodeError> {
        let decoder = image::codecs::jpeg::JpegDecoder::new(Cursor::new(bytes))
            .map_err(|e| DecodeError::from_image(InputFormat::Jpeg, e))?;
        decode_with(InputFormat::Jpeg, decoder)
    }
}
