//! Image resizing.
//!
//! Uses the `image` crate's separable resamplers. The pipeline always resizes
//! with [`FilterType::Lanczos3`]; the other filters are available to callers of
//! [`resize`] directly.

use image::imageops;
use image::{GrayImage, Limits, RgbaImage};

use crate::error::TransformError;
use crate::raster::{ColorModel, Pixels, Raster};

/// Bytes per pixel of the floating-point buffer the resampler works in.
const RESAMPLE_BYTES_PER_PIXEL: u64 = 16;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// 3-lobe Lanczos windowed sinc (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> imageops::FilterType {
        match self {
            FilterType::Nearest => imageops::FilterType::Nearest,
            FilterType::Bilinear => imageops::FilterType::Triangle,
            FilterType::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// Compute output dimensions for a requested `width` x `height`.
///
/// A zero axis is derived from the source aspect ratio (rounded, at least 1).
/// When both axes are non-zero they are used as-is, even if that changes the
/// aspect ratio. A zero-area source leaves the request unchanged.
pub fn target_dimensions(src_width: u32, src_height: u32, width: u32, height: u32) -> (u32, u32) {
    if src_width == 0 || src_height == 0 {
        return (width, height);
    }
    match (width, height) {
        (0, 0) => (src_width, src_height),
        (w, 0) => {
            let h = (src_height as f64 * w as f64 / src_width as f64).round() as u32;
            (w, h.max(1))
        }
        (0, h) => {
            let w = (src_width as f64 * h as f64 / src_height as f64).round() as u32;
            (w.max(1), h)
        }
        (w, h) => (w, h),
    }
}

/// Check that resampling a raster `src_width` pixels wide to `width` x `height`
/// stays within the allocation limit the decoders use.
///
/// Counts the output buffer plus the intermediate vertical pass, which holds
/// `src_width` x `height` floating-point pixels.
pub fn check_resize_limits(
    src_width: u32,
    width: u32,
    height: u32,
    channels: u64,
) -> Result<(), TransformError> {
    let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
    let output = u64::from(width)
        .saturating_mul(u64::from(height))
        .saturating_mul(channels);
    let intermediate = u64::from(src_width)
        .saturating_mul(u64::from(height))
        .saturating_mul(RESAMPLE_BYTES_PER_PIXEL);
    if output.saturating_add(intermediate) > max_alloc {
        return Err(TransformError::InvalidOptions(format!(
            "resize target {}x{} exceeds the {} byte memory limit",
            width, height, max_alloc
        )));
    }
    Ok(())
}

/// Resize a raster to exact dimensions.
///
/// # Returns
///
/// A new `Raster` at the origin with the specified dimensions and the source
/// colour model. A zero-area source is returned unchanged; a zero target axis
/// produces a zero-area raster.
///
/// # Errors
///
/// Returns `TransformError::InvalidOptions` if the target would exceed the
/// allocation limit (see [`check_resize_limits`]).
pub fn resize(
    raster: &Raster,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Raster, TransformError> {
    if raster.is_empty() {
        return Ok(raster.clone());
    }
    if width == 0 || height == 0 {
        return Ok(empty_like(raster));
    }

    // Fast path: if dimensions match, just move to the origin
    if raster.dimensions() == (width, height) {
        return Ok(raster.clone().with_origin(crate::geometry::Point::ORIGIN));
    }

    let channels = match raster.color_model() {
        ColorModel::Rgba => 4,
        ColorModel::Luma => 1,
    };
    check_resize_limits(raster.width(), width, height, channels)?;

    log::debug!(
        "Resizing {}x{} to {}x{} with {:?}",
        raster.width(),
        raster.height(),
        width,
        height,
        filter
    );

    let filter = filter.to_image_filter();
    let pixels = match raster.pixels() {
        Pixels::Rgba(img) => Pixels::Rgba(imageops::resize(img, width, height, filter)),
        Pixels::Luma(img) => Pixels::Luma(imageops::resize(img, width, height, filter)),
    };
    Ok(Raster::from_pixels(pixels))
}

/// Resize for the pipeline: derive a missing axis, then resample with Lanczos3.
pub fn apply_resize(raster: Raster, width: u32, height: u32) -> Result<Raster, TransformError> {
    let (w, h) = target_dimensions(raster.width(), raster.height(), width, height);
    resize(&raster, w, h, FilterType::Lanczos3)
}

fn empty_like(raster: &Raster) -> Raster {
    match raster.color_model() {
        ColorModel::Rgba => Raster::from_rgba(RgbaImage::new(0, 0)),
        ColorModel::Luma => Raster::from_luma(GrayImage::new(0, 0)),
    }
}
