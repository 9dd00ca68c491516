//! Browser Bindings
//!
//! Thin wrappers over the browser APIs the pages need, organized by concern.

mod storage;
mod fonts;
mod jspdf;
mod dom;

use wasm_bindgen::JsValue;

pub use storage::BrowserStorage;
pub use jspdf::JsPdfWriter;
pub use dom::{current_hash, scroll_into_view, today};

/// Best-effort readable message from a thrown JS value
pub(crate) fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
