// Console logging and JS interop helpers

use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

// Native builds (unit tests) have no console to write to.
#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg;
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    let _ = msg;
}

/// Best-effort human readable text for a rejected JS promise value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::JSON::stringify(err)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}
