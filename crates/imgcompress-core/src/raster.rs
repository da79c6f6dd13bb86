//! In-memory decoded image.
//!
//! A [`Raster`] pairs a pixel store with the bounding rectangle it occupies.
//! Freshly decoded rasters sit at the origin; a cropped raster keeps the
//! coordinates of the region it was cut from, so a second crop is expressed in
//! the same coordinate space as the first.

use image::{GrayImage, Luma, RgbaImage};

use crate::geometry::{Point, Rect};

/// Per-pixel colour representation of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    /// 8-bit RGBA, non-premultiplied.
    Rgba,
    /// 8-bit single-channel luminance.
    Luma,
}

/// Pixel storage for a raster.
#[derive(Debug, Clone, PartialEq)]
pub enum Pixels {
    Rgba(RgbaImage),
    Luma(GrayImage),
}

impl Pixels {
    fn dimensions(&self) -> (u32, u32) {
        match self {
            Pixels::Rgba(img) => img.dimensions(),
            Pixels::Luma(img) => img.dimensions(),
        }
    }
}

/// A decoded image with a bounding rectangle.
///
/// Invariant: the pixel store's dimensions always equal the bounds' size.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    bounds: Rect,
    pixels: Pixels,
}

impl Raster {
    /// Create an RGBA raster at the origin.
    pub fn from_rgba(img: RgbaImage) -> Self {
        Self::from_pixels(Pixels::Rgba(img))
    }

    /// Create a luminance raster at the origin.
    pub fn from_luma(img: GrayImage) -> Self {
        Self::from_pixels(Pixels::Luma(img))
    }

    /// Create a raster at the origin from any pixel store.
    pub fn from_pixels(pixels: Pixels) -> Self {
        let (w, h) = pixels.dimensions();
        Self {
            bounds: Rect::with_size(w, h),
            pixels,
        }
    }

    /// Assemble a raster from an existing bounds rectangle and pixel store.
    pub(crate) fn from_parts(bounds: Rect, pixels: Pixels) -> Self {
        debug_assert_eq!(
            pixels.dimensions(),
            (bounds.width(), bounds.height()),
            "Pixel store size mismatch"
        );
        Self { bounds, pixels }
    }

    /// A zero-area RGBA raster.
    pub fn empty() -> Self {
        Self::from_rgba(RgbaImage::new(0, 0))
    }

    /// Move the raster so its top-left corner sits at `origin`.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.bounds = self
            .bounds
            .translate(
                origin.x.saturating_sub(self.bounds.min.x),
                origin.y.saturating_sub(self.bounds.min.y),
            );
        self
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn color_model(&self) -> ColorModel {
        match self.pixels {
            Pixels::Rgba(_) => ColorModel::Rgba,
            Pixels::Luma(_) => ColorModel::Luma,
        }
    }

    /// Check if this raster covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    pub fn into_pixels(self) -> Pixels {
        self.pixels
    }

    /// Read the pixel at absolute coordinates `(x, y)` as RGBA.
    ///
    /// Luminance pixels are expanded to opaque gray. Returns `None` outside
    /// the raster's bounds.
    pub fn pixel_rgba(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if !self.bounds.contains_point(Point::new(x, y)) {
            return None;
        }
        let lx = x.abs_diff(self.bounds.min.x);
        let ly = y.abs_diff(self.bounds.min.y);
        Some(match &self.pixels {
            Pixels::Rgba(img) => img.get_pixel(lx, ly).0,
            Pixels::Luma(img) => {
                let Luma([v]) = *img.get_pixel(lx, ly);
                [v, v, v, u8::MAX]
            }
        })
    }

    /// Copy `region` (absolute coordinates, must lie within the bounds) into a
    /// new raster with the same colour model.
    pub(crate) fn copy_region(&self, region: Rect) -> Raster {
        let (w, h) = (region.width(), region.height());
        let dx = region.min.x.abs_diff(self.bounds.min.x);
        let dy = region.min.y.abs_diff(self.bounds.min.y);
        let pixels = match &self.pixels {
            Pixels::Rgba(src) => Pixels::Rgba(RgbaImage::from_fn(w, h, |x, y| {
                *src.get_pixel(x + dx, y + dy)
            })),
            Pixels::Luma(src) => Pixels::Luma(GrayImage::from_fn(w, h, |x, y| {
                *src.get_pixel(x + dx, y + dy)
            })),
        };
        Raster {
            bounds: region,
            pixels,
        }
    }
}

/// Build an opaque RGBA pixel.
#[cfg(test)]
pub(crate) fn rgba(r: u8, g: u8, b: u8) -> image::Rgba<u8> {
    image::Rgba([r, g, b, u8::MAX])
}
