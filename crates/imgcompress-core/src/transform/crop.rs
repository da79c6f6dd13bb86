//! Rectangle cropping.
//!
//! The requested region is expressed in the raster's own coordinate space and
//! intersected with the raster's bounds, so out-of-range requests are clipped
//! rather than rejected. A region that misses the raster entirely yields a
//! zero-area raster.
//!
//! # Example
//!
//! ```ignore
//! // Keep the top-left 80x80 pixels
//! let cropped = apply_crop(&raster, Rect::from_origin_size(0, 0, 80, 80));
//! ```

use crate::geometry::Rect;
use crate::raster::Raster;

/// Crop a raster to `requested ∩ raster.bounds()`.
///
/// # Returns
///
/// A new `Raster` whose bounds are the intersection, keeping the source
/// coordinates of that region and the source colour model. If the
/// intersection is empty the result is [`Raster::empty`].
pub fn apply_crop(raster: &Raster, requested: Rect) -> Raster {
    let region = requested.intersect(&raster.bounds());
    if region.is_empty() {
        log::warn!(
            "Crop region {:?} does not overlap image bounds {:?}",
            requested,
            raster.bounds()
        );
        return Raster::empty();
    }

    // Fast path: region covers the whole raster
    if region == raster.bounds() {
        return raster.clone();
    }

    raster.copy_region(region)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use image::RgbaImage;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=60, 1u32..=60)
    }

    /// Strategy for generating crop rectangles, including ones outside the image.
    fn crop_strategy() -> impl Strategy<Value = Rect> {
        (-80i32..=80, -80i32..=80, 1u32..=100, 1u32..=100)
            .prop_map(|(x, y, w, h)| Rect::from_origin_size(x, y, w, h))
    }

    fn create_test_image(width: u32, height: u32) -> Raster {
        Raster::from_rgba(RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([x as u8, y as u8, 7, 255])
        }))
    }

    proptest! {
        /// Property: Result bounds are the intersection and lie within the source.
        #[test]
        fn prop_result_within_source(
            (width, height) in dimensions_strategy(),
            requested in crop_strategy(),
        ) {
            let img = create_test_image(width, height);
            let result = apply_crop(&img, requested);

            prop_assert!(img.bounds().contains_rect(&result.bounds()));
            prop_assert_eq!(result.bounds(), requested.intersect(&img.bounds()));
            prop_assert!(result.width() <= width);
            prop_assert!(result.height() <= height);
        }

        /// Property: Every cropped pixel equals the source pixel at the same coordinates.
        #[test]
        fn prop_cropped_pixels_from_original(
            (width, height) in dimensions_strategy(),
            requested in crop_strategy(),
        ) {
            let img = create_test_image(width, height);
            let result = apply_crop(&img, requested);
            let b = result.bounds();

            for y in b.min.y..b.max.y {
                for x in b.min.x..b.max.x {
                    prop_assert_eq!(result.pixel_rgba(x, y), img.pixel_rgba(x, y));
                }
            }
        }

        /// Property: Cropping is deterministic.
        #[test]
        fn prop_crop_is_deterministic(
            (width, height) in dimensions_strategy(),
            requested in crop_strategy(),
        ) {
            let img = create_test_image(width, height);
            prop_assert_eq!(apply_crop(&img, requested), apply_crop(&img, requested));
        }
    }
}
