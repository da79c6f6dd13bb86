//! Geometric and colour transforms applied between decode and encode.
//!
//! # Transform Order
//!
//! The pipeline applies transforms in this fixed order, regardless of which
//! ones are requested:
//! 1. Crop (less data for the later stages)
//! 2. Grayscale (before resampling, so downscaling averages luma)
//! 3. Resize
//!
//! # Coordinate System
//!
//! - Crop rectangles are in pixels, in the raster's coordinate space
//! - Origin is top-left corner

mod crop;
mod grayscale;
mod resize;

pub use crop::apply_crop;
pub use grayscale::apply_grayscale;
pub use resize::{apply_resize, check_resize_limits, resize, target_dimensions, FilterType};
