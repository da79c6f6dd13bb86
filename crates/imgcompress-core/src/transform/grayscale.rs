//! Grayscale conversion.

use image::{GrayImage, Luma};

use crate::luminance::luma_rgba;
use crate::raster::{Pixels, Raster};

/// Convert a raster to single-channel luminance.
///
/// RGBA pixels are composited onto black and weighted with BT.601 luma
/// coefficients. The result has the same bounds as the input; a raster that is
/// already luminance is returned as-is.
pub fn apply_grayscale(raster: Raster) -> Raster {
    let bounds = raster.bounds();
    match raster.into_pixels() {
        Pixels::Luma(img) => Raster::from_parts(bounds, Pixels::Luma(img)),
        Pixels::Rgba(img) => {
            let (w, h) = img.dimensions();
            let mut gray = GrayImage::new(w, h);
            for (src, dst) in img.pixels().zip(gray.pixels_mut()) {
                *dst = Luma([luma_rgba(src.0)]);
            }
            Raster::from_parts(bounds, Pixels::Luma(gray))
        }
    }
}
