//! The decode → crop → grayscale → resize → encode pipeline.
//!
//! A [`Pipeline`] owns its decoder and encoder registries and holds no other
//! state, so one instance can serve any number of invocations (including from
//! several threads). Each invocation owns its raster from decode to encode.

use crate::decode::{DecoderRegistry, InputFormat};
use crate::encode::{EncodeSettings, EncoderRegistry};
use crate::error::{Result, TransformError};
use crate::options::{OutputFormat, TransformOptions};
use crate::raster::Raster;
use crate::transform::{apply_crop, apply_grayscale, apply_resize};

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// The encoded image.
    pub bytes: Vec<u8>,
    /// Encoding of `bytes`.
    pub format: OutputFormat,
    /// Format detected for the input.
    pub source_format: InputFormat,
    /// Input dimensions (width, height).
    pub source_size: (u32, u32),
    /// Output dimensions (width, height).
    pub output_size: (u32, u32),
}

/// Image transformation pipeline.
#[derive(Default)]
pub struct Pipeline {
    decoders: DecoderRegistry,
    encoders: EncoderRegistry,
}

impl Pipeline {
    /// Build a pipeline from custom registries.
    pub fn new(decoders: DecoderRegistry, encoders: EncoderRegistry) -> Self {
        Self { decoders, encoders }
    }

    /// Run the full pipeline on `bytes`.
    ///
    /// Stages run in a fixed order: options are validated and the encoder is
    /// resolved before decoding, then crop, grayscale and resize are applied
    /// as requested, and the result is encoded.
    ///
    /// # Errors
    ///
    /// - `TransformError::InvalidOptions` for malformed option values, or a
    ///   resize target too large to allocate
    /// - `TransformError::UnsupportedFormat` if no encoder handles the output format
    /// - `TransformError::Decode` if the input cannot be decoded
    /// - `TransformError::Encode` if the encoder rejects the result, including
    ///   a crop that left no pixels
    pub fn process(&self, bytes: &[u8], options: &TransformOptions) -> Result<TransformOutput> {
        options.validate()?;
        let encoder = self
            .encoders
            .get(options.output_format)
            .ok_or_else(|| TransformError::UnsupportedFormat(options.output_format.to_string()))?;

        let decoded = self.decoders.decode(bytes)?;
        let source_size = decoded.raster.dimensions();

        let raster = self.transform(decoded.raster, options)?;
        let output_size = raster.dimensions();

        let settings = EncodeSettings {
            quality: options.quality,
        };
        let bytes = encoder.encode(&raster, &settings)?;

        log::debug!(
            "Transformed {} {}x{} -> {} {}x{} ({} bytes)",
            decoded.format,
            source_size.0,
            source_size.1,
            options.output_format,
            output_size.0,
            output_size.1,
            bytes.len()
        );

        Ok(TransformOutput {
            bytes,
            format: options.output_format,
            source_format: decoded.format,
            source_size,
            output_size,
        })
    }

    /// Apply the requested transforms to a decoded raster.
    pub fn transform(&self, mut raster: Raster, options: &TransformOptions) -> Result<Raster> {
        if let Some(crop) = options.active_crop() {
            raster = apply_crop(&raster, crop.rect());
        }
        if options.grayscale {
            raster = apply_grayscale(raster);
        }
        if options.wants_resize() {
            raster = apply_resize(raster, options.width, options.height)?;
        }
        Ok(raster)
    }
}

/// Transform `bytes` with the built-in decoders and encoders.
pub fn transform_image(bytes: &[u8], options: &TransformOptions) -> Result<Vec<u8>> {
    Pipeline::default()
        .process(bytes, options)
        .map(|output| output.bytes)
}
