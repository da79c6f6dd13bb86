//! PNG encoding at maximum compression.

use image::codecs::png::{self, CompressionType};
use image::{ExtendedColorType, ImageEncoder};

use crate::options::OutputFormat;
use crate::raster::{Pixels, Raster};

use super::{ensure_not_empty, EncodeError, EncodeSettings, Encoder};

/// PNG encoder. Ignores [`EncodeSettings::quality`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Png
    }

    fn encode(&self, raster: &Raster, _settings: &EncodeSettings) -> Result<Vec<u8>, EncodeError> {
        encode_png(raster)
    }
}

/// Encode a raster to PNG bytes with best compression and adaptive filtering.
///
/// Luminance rasters are written as 8-bit gray. RGBA rasters are written as
/// 8-bit RGB when every pixel is opaque, otherwise as 8-bit RGBA.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    ensure_not_empty(raster)?;
    let (width, height) = raster.dimensions();

    let mut buffer = Vec::new();
    let encoder =
        png::PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, png::FilterType::Adaptive);

    let result = match raster.pixels() {
        Pixels::Luma(img) => encoder.write_image(img.as_raw(), width, height, ExtendedColorType::L8),
        Pixels::Rgba(img) if is_opaque(img.as_raw()) => {
            let rgb = strip_alpha(img.as_raw());
            encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        }
        Pixels::Rgba(img) => {
            encoder.write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        }
    };
    result.map_err(|e| EncodeError::from_image(OutputFormat::Png, e))?;

    log::debug!("Encoded {}x{} PNG: {} bytes", width, height, buffer.len());
    Ok(buffer)
}

fn is_opaque(rgba: &[u8]) -> bool {
    rgba.chunks_exact(4).all(|px| px[3] == u8::MAX)
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::rgba;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    fn decode(bytes: &[u8]) -> image::DynamicImage {
        image::load_from_memory_with_format(bytes, image::ImageFormat::Png).unwrap()
    }

    #[test]
    fn test_encode_png_signature() {
        let img = Raster::from_rgba(RgbaImage::from_pixel(4, 4, rgba(1, 2, 3)));
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let src = RgbaImage::from_fn(20, 10, |x, y| Rgba([x as u8 * 12, y as u8 * 25, 7, (x * y) as u8]));
        let bytes = encode_png(&Raster::from_rgba(src.clone())).unwrap();
        assert_eq!(decode(&bytes).into_rgba8(), src);
    }

    #[test]
    fn test_encode_png_opaque_drops_alpha() {
        let src = RgbaImage::from_fn(16, 8, |x, y| rgba(x as u8 * 15, y as u8 * 30, 99));
        let bytes = encode_png(&Raster::from_rgba(src.clone())).unwrap();
        let decoded = decode(&bytes);
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.into_rgba8(), src);
    }

    #[test]
    fn test_encode_png_translucent_keeps_alpha() {
        let mut src = RgbaImage::from_pixel(4, 4, rgba(10, 20, 30));
        src.put_pixel(2, 2, Rgba([10, 20, 30, 128]));
        let bytes = encode_png(&Raster::from_rgba(src.clone())).unwrap();
        let decoded = decode(&bytes);
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.into_rgba8(), src);
    }

    #[test]
    fn test_encode_png_luma() {
        let src = GrayImage::from_fn(9, 9, |x, _| Luma([x as u8 * 20]));
        let bytes = encode_png(&Raster::from_luma(src.clone())).unwrap();
        let decoded = decode(&bytes);
        assert_eq!(decoded.color(), image::ColorType::L8);
        assert_eq!(decoded.into_luma8(), src);
    }

    #[test]
    fn test_encode_png_ignores_quality() {
        let img = Raster::from_rgba(RgbaImage::from_pixel(8, 8, rgba(9, 9, 9)));
        let low = PngEncoder
            .encode(&img, &EncodeSettings { quality: 1 })
            .unwrap();
        let high = PngEncoder
            .encode(&img, &EncodeSettings { quality: 100 })
            .unwrap();
        assert_eq!(low, high);
    }

    #[test]
    fn test_encode_png_empty() {
        let result = encode_png(&Raster::empty());
        assert!(matches!(
            result,
            Err(EncodeError::EmptyImage {
                width: 0,
                height: 0
            })
        ));
    }
}
