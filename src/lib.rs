pub mod chord;
pub mod dsp;
pub mod error;
pub mod fretboard;
pub mod note;
pub mod scale;
pub mod theory;
pub mod tuning;

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the fretlab-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: compute the full theory aggregate for one selection.
/// Called by the frontend once per input change; errors become JS
/// exceptions carrying the theory error message.
#[wasm_bindgen]
pub fn get_data(
    root: &str,
    scale_type: &str,
    complexity: &str,
    tuning: &str,
) -> Result<JsValue, JsValue> {
    let data = theory::get_data(root, scale_type, complexity, tuning)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&data).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render an ascending pass through a scale to a WAV
/// byte array.
#[wasm_bindgen]
pub fn render_scale_wav(
    root: &str,
    scale_type: &str,
    sample_rate: u32,
) -> Result<Vec<u8>, JsValue> {
    dsp::renderer::scale_wav(root, scale_type, sample_rate)
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render one strummed chord to a WAV byte array.
#[wasm_bindgen]
pub fn render_chord_wav(frequencies: Vec<f64>, sample_rate: u32) -> Vec<u8> {
    dsp::renderer::chord_wav(&frequencies, sample_rate)
}
