//! Shared wasm/JS glue for browser adapters.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Converts a thrown JS value into readable error text.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}
