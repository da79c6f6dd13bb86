//! Conversions between JavaScript values and core types.
//!
//! Options arrive as a plain object and errors leave as plain strings, so the
//! host never has to know about Rust error types.

use imgcompress_core::{RawOptions, TransformError};
use wasm_bindgen::prelude::*;

/// Deserialize the host's options object.
pub(crate) fn options_from_js(value: JsValue) -> Result<RawOptions, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Error: Invalid options: {}", e)))
}

/// Render a pipeline error as the message thrown to the host.
///
/// Decode and encode failures already carry their own prefix.
pub(crate) fn error_message(err: &TransformError) -> String {
    match err {
        TransformError::InvalidOptions(_) | TransformError::UnsupportedFormat(_) => {
            format!("Error: {}", err)
        }
        TransformError::Decode(_) | TransformError::Encode(_) => err.to_string(),
    }
}
