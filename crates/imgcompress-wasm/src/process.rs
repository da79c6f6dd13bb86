//! Image transformation WASM bindings.
//!
//! # Functions
//!
//! - [`process_image`] - Decode, transform and re-encode an image
//! - [`detect_format`] - Report the encoded format of a buffer
//!
//! # Example
//!
//! ```typescript
//! import { process_image, detect_format } from '@imgcompress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! console.log(`Source format: ${detect_format(bytes)}`);
//!
//! const png = process_image(bytes, {
//!   format: 'png',
//!   grayscale: true,
//!   crop: { x: 0, y: 0, width: 400, height: 300 },
//! });
//! ```

use imgcompress_core::decode;
use imgcompress_core::RawOptions;
use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::types::{error_message, options_from_js};

/// Transform an encoded image.
///
/// # Arguments
///
/// * `image_data` - Encoded JPEG or PNG bytes. Copied into WASM memory, so the
///   caller may reuse the array as soon as this returns.
/// * `options` - `{ format, quality?, width?, height?, grayscale?, crop? }`
///   where `format` is `"jpeg"` or `"png"` and `crop` is
///   `{ x, y, width, height }`. Missing fields default to 0 / false / no crop.
///
/// # Returns
///
/// A new `Uint8Array` with the encoded result, owned by the caller.
///
/// # Errors
///
/// Throws a descriptive string, e.g. `"Error: Unsupported format bmp"`,
/// `"Error decoding image: ..."` or `"Error encoding image: ..."`.
#[wasm_bindgen]
pub fn process_image(image_data: &Uint8Array, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let raw = options_from_js(options)?;
    let bytes = image_data.to_vec();
    run(&bytes, raw).map_err(|e| JsValue::from_str(&e))
}

/// Detect the encoded format of `bytes` from its signature.
///
/// Returns `"jpeg"`, `"png"` or `undefined` if the format is not recognised.
#[wasm_bindgen]
pub fn detect_format(bytes: &[u8]) -> Option<String> {
    decode::detect_format(bytes).map(|f| f.to_string())
}

/// Run the core pipeline, rendering failures as host-facing messages.
pub(crate) fn run(bytes: &[u8], raw: RawOptions) -> Result<Vec<u8>, String> {
    imgcompress_core::process(bytes, raw).map_err(|e| error_message(&e))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use imgcompress_core::encode::encode_png;
    use imgcompress_core::Raster;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn png_array(width: u32, height: u32) -> Uint8Array {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let bytes = encode_png(&Raster::from_rgba(img)).unwrap();
        Uint8Array::from(bytes.as_slice())
    }

    fn options(json: &str) -> JsValue {
        js_sys::JSON::parse(json).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_process_image_defaults() {
        let result = process_image(&png_array(8, 8), options(r#"{"format":"png"}"#));
        let bytes = result.unwrap();
        assert_eq!(detect_format(&bytes), Some("png".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_process_image_resize() {
        let result = process_image(
            &png_array(40, 20),
            options(r#"{"format":"jpeg","quality":90,"width":20}"#),
        );
        let decoded = imgcompress_core::decode::decode(&result.unwrap()).unwrap();
        assert_eq!(decoded.raster.dimensions(), (20, 10));
    }

    #[wasm_bindgen_test]
    fn test_process_image_unsupported_format() {
        let err = process_image(&png_array(4, 4), options(r#"{"format":"bmp"}"#)).unwrap_err();
        assert_eq!(err.as_string().unwrap(), "Error: Unsupported format bmp");
    }

    #[wasm_bindgen_test]
    fn test_process_image_missing_options() {
        let result = process_image(&png_array(4, 4), JsValue::UNDEFINED);
        assert!(result.is_err());
    }
}
