//! PNG decoding.

use std::io::Cursor;

use crate::raster::Raster;

use super::{decode_with, DecodeError, Decoder, InputFormat};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// PNG decoder. Animated PNGs decode to their default image only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl Decoder for PngDecoder {
    fn format(&self) -> InputFormat {
        InputFormat::Png
    }

    fn matches(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(PNG_SIGNATURE)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Raster, DecodeError> {
        let decoder = image::codecs::png::PngDecoder::new(Cursor::new(bytes))
            .map_err(|e| DecodeError::from_image(InputFormat::Png, e))?;
        decode_with(InputFormat::Png, decoder)
    }
}
