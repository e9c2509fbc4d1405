//! Browser implementations of the lib-core seams

pub mod extension;
pub mod gateway;
pub mod storage;

pub use extension::{AccountSubscription, InjectedHost, JsSigner};
pub use gateway::PapiGateway;
pub use storage::BrowserStore;

use wasm_bindgen::JsValue;

/// Best-effort message out of a thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
    {
        return message;
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
