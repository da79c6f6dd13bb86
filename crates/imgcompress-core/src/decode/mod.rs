//! Image decoding.
//!
//! Input bytes are matched against the signatures of the registered
//! [`Decoder`]s; the first decoder that recognises the data produces the
//! [`Raster`]. Formats are detected from content only, never from a file name
//! or MIME type.
//!
//! New formats are added by implementing [`Decoder`] and registering it on a
//! [`DecoderRegistry`]. Later stages only see the raster, so nothing
//! downstream changes.
//!
//! # Examples
//!
//! ```ignore
//! use imgcompress_core::decode::decode;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let decoded = decode(&bytes).unwrap();
//! println!("Decoded {} {}x{}", decoded.format, decoded.raster.width(), decoded.raster.height());
//! ```

mod jpeg;
mod png;
mod types;

use image::{ColorType, DynamicImage, ImageDecoder, Limits};

use crate::raster::Raster;

pub use jpeg::JpegDecoder;
pub use png::PngDecoder;
pub use types::{DecodeError, DecodedImage, InputFormat};

/// A decoder for one encoded format.
pub trait Decoder: Send + Sync {
    /// The format this decoder handles.
    fn format(&self) -> InputFormat;

    /// Returns true if `bytes` start with this format's signature.
    fn matches(&self, bytes: &[u8]) -> bool;

    /// Decode `bytes` into a raster at the origin.
    fn decode(&self, bytes: &[u8]) -> Result<Raster, DecodeError>;
}

/// Ordered set of decoders consulted by [`DecoderRegistry::decode`].
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn Decoder>>,
}

impl DecoderRegistry {
    /// Create a registry with no decoders.
    pub fn empty() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Register a decoder, replacing any existing one for the same format.
    pub fn register<D: Decoder + 'static>(&mut self, decoder: D) -> &mut Self {
        let format = decoder.format();
        self.decoders.retain(|d| d.format() != format);
        self.decoders.push(Box::new(decoder));
        self
    }

    /// Formats with a registered decoder, in registration order.
    pub fn formats(&self) -> Vec<InputFormat> {
        self.decoders.iter().map(|d| d.format()).collect()
    }

    /// Find the decoder whose signature matches `bytes`.
    pub fn detect(&self, bytes: &[u8]) -> Option<&dyn Decoder> {
        self.decoders
            .iter()
            .find(|d| d.matches(bytes))
            .map(|d| d.as_ref())
    }

    /// Detect the format of `bytes` and decode them.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Empty` for an empty buffer,
    /// `DecodeError::UnrecognizedFormat` if no decoder matches, and the
    /// decoder's own error if the data is truncated or corrupt.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        let decoder = self.detect(bytes).ok_or(DecodeError::UnrecognizedFormat)?;
        let raster = decoder.decode(bytes)?;
        log::debug!(
            "Decoded {} image: {}x{}",
            decoder.format(),
            raster.width(),
            raster.height()
        );
        Ok(DecodedImage {
            raster,
            format: decoder.format(),
        })
    }
}

impl Default for DecoderRegistry {
    /// Registry with the built-in JPEG and PNG decoders.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(JpegDecoder).register(PngDecoder);
        registry
    }
}

/// Decode `bytes` with the built-in decoders.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    DecoderRegistry::default().decode(bytes)
}

/// Detect the format of `bytes` with the built-in decoders.
pub fn detect_format(bytes: &[u8]) -> Option<InputFormat> {
    DecoderRegistry::default()
        .detect(bytes)
        .map(|d| d.format())
}

/// Run an `image` decoder under default memory limits and convert the result.
pub(crate) fn decode_with<D: ImageDecoder>(
    format: InputFormat,
    mut decoder: D,
) -> Result<Raster, DecodeError> {
    decoder
        .set_limits(Limits::default())
        .map_err(|e| DecodeError::from_image(format, e))?;
    let img = DynamicImage::from_decoder(decoder).map_err(|e| DecodeError::from_image(format, e))?;
    Ok(raster_from_dynamic(img))
}

/// Single-channel sources without alpha stay luminance; everything else is
/// normalised to 8-bit RGBA.
fn raster_from_dynamic(img: DynamicImage) -> Raster {
    match img.color() {
        ColorType::L8 | ColorType::L16 => Raster::from_luma(img.into_luma8()),
        _ => Raster::from_rgba(img.into_rgba8()),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Encoded test images built in-memory.

    use std::io::Cursor;

    use image::{DynamicImage, GrayImage, ImageFormat, Luma, RgbaImage};

    use crate::raster::rgba;

    /// RGBA gradient where each pixel encodes its position.
    pub fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            rgba((x % 256) as u8, (y % 256) as u8, 128)
        })
    }

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        encode(
            DynamicImage::ImageRgba8(gradient_rgba(width, height)),
            ImageFormat::Png,
        )
    }

    pub fn gray_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = GrayImage::from_fn(width, height, |x, _| Luma([(x % 256) as u8]));
        encode(DynamicImage::ImageLuma8(img), ImageFormat::Png)
    }

    pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let rgb = DynamicImage::ImageRgba8(gradient_rgba(width, height)).into_rgb8();
        encode(DynamicImage::ImageRgb8(rgb), ImageFormat::Jpeg)
    }
}
