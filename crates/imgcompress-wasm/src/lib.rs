//! imgcompress WASM - WebAssembly bindings for the imgcompress pipeline
//!
//! This crate is the boundary between JavaScript and `imgcompress-core`. It
//! copies buffers in and out of WASM memory and turns the host's options
//! object into the core's option types; all image work happens in the core.
//!
//! # Module Structure
//!
//! - `process` - The image transformation entry point
//! - `types` - Conversions between core results and JavaScript values
//! - `logger` - `log` backend writing to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { process_image } from '@imgcompress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! try {
//!   const jpeg = process_image(bytes, { format: 'jpeg', quality: 80, width: 800 });
//! } catch (message) {
//!   console.error(message);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod logger;
mod process;
mod types;

pub use process::{detect_format, process_image};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);
    log::info!("imgcompress WASM initialized (v{})", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Add the first two numbers in `args`.
///
/// Connectivity check for the host page: if this returns, the module is
/// loaded and callable.
///
/// # Example
///
/// ```typescript
/// add([2, 3]); // 5
/// add([2]);    // throws "Error: 2 arguments are required"
/// ```
#[wasm_bindgen]
pub fn add(args: Vec<JsValue>) -> Result<i32, JsValue> {
    let values = args
        .iter()
        .map(|v| {
            v.as_f64()
                .map(|f| f as i32)
                .ok_or_else(|| JsValue::from_str("Error: arguments must be numbers"))
        })
        .collect::<Result<Vec<i32>, JsValue>>()?;
    sum_pair(&values).map_err(|e| JsValue::from_str(&e))
}

/// Wrapping sum of the first two values.
fn sum_pair(values: &[i32]) -> Result<i32, String> {
    match values {
        [a, b, ..] => Ok(a.wrapping_add(*b)),
        _ => Err("Error: 2 arguments are required".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_sum_pair() {
        assert_eq!(sum_pair(&[2, 3]), Ok(5));
        assert_eq!(sum_pair(&[-7, 7, 100]), Ok(0));
        assert_eq!(sum_pair(&[i32::MAX, 1]), Ok(i32::MIN));
    }

    #[test]
    fn test_sum_pair_requires_two_arguments() {
        let expected = Err("Error: 2 arguments are required".to_string());
        assert_eq!(sum_pair(&[]), expected);
        assert_eq!(sum_pair(&[1]), expected);
    }
}
