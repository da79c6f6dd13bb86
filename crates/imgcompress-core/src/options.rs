//! Transform options: the raw host record and its validated form.
//!
//! Hosts hand over a loosely-typed record ([`RawOptions`]) in which every field
//! but `format` may be missing. [`TransformOptions`] is the validated,
//! immutable form the pipeline runs on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::geometry::Rect;

/// Output encodings the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpeg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            other => Err(TransformError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Requested crop region in raster coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CropRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the region has positive area and should be applied.
    pub fn is_active(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// The rectangle `[x, y]` to `[x + width, y + height]`.
    ///
    /// Only meaningful for a validated region (non-negative size, no
    /// overflow); other inputs are clamped.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(
            self.x,
            self.y,
            self.width.max(0).unsigned_abs(),
            self.height.max(0).unsigned_abs(),
        )
    }

    fn validate(&self) -> Result<(), TransformError> {
        if self.width < 0 || self.height < 0 {
            return Err(TransformError::InvalidOptions(format!(
                "crop dimensions must not be negative (got {}x{})",
                self.width, self.height
            )));
        }
        if self.x.checked_add(self.width).is_none() || self.y.checked_add(self.height).is_none() {
            return Err(TransformError::InvalidOptions(
                "crop rectangle exceeds the coordinate range".to_string(),
            ));
        }
        Ok(())
    }
}

/// Options record as supplied by a host.
///
/// Missing fields take their defaults: `quality=0`, `width=0`, `height=0`,
/// `grayscale=false`, `crop=None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOptions {
    pub format: String,
    #[serde(default)]
    pub quality: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub grayscale: bool,
    #[serde(default)]
    pub crop: Option<CropRegion>,
}

/// Validated configuration for one pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOptions {
    pub output_format: OutputFormat,
    /// JPEG quality. Ignored for PNG.
    pub quality: i32,
    /// Target width, 0 = unconstrained.
    pub width: u32,
    /// Target height, 0 = unconstrained.
    pub height: u32,
    pub grayscale: bool,
    pub crop: Option<CropRegion>,
}

impl TransformOptions {
    /// Options that only re-encode to `output_format`.
    pub fn new(output_format: OutputFormat) -> Self {
        Self {
            output_format,
            quality: 0,
            width: 0,
            height: 0,
            grayscale: false,
            crop: None,
        }
    }

    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    pub fn with_crop(mut self, crop: CropRegion) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Check option values before any pixel data is touched.
    pub fn validate(&self) -> Result<(), TransformError> {
        if let Some(crop) = &self.crop {
            crop.validate()?;
        }
        Ok(())
    }

    /// The crop to apply, if any. Zero-area regions are a no-op.
    pub fn active_crop(&self) -> Option<CropRegion> {
        self.crop.filter(CropRegion::is_active)
    }

    /// Returns true if a resize was requested on at least one axis.
    pub fn wants_resize(&self) -> bool {
        self.width > 0 || self.height > 0
    }
}

impl TryFrom<RawOptions> for TransformOptions {
    type Error = TransformError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        let output_format = raw.format.parse::<OutputFormat>()?;

        let width = u32::try_from(raw.width).map_err(|_| {
            TransformError::InvalidOptions(format!("width must not be negative (got {})", raw.width))
        })?;
        let height = u32::try_from(raw.height).map_err(|_| {
            TransformError::InvalidOptions(format!(
                "height must not be negative (got {})",
                raw.height
            ))
        })?;

        let options = TransformOptions {
            output_format,
            quality: raw.quality,
            width,
            height,
            grayscale: raw.grayscale,
            crop: raw.crop,
        };
        options.validate()?;
        Ok(options)
    }
}
