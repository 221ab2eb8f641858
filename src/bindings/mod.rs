//! Vendor Library Bindings
//!
//! The page loads its UI libraries as plain `<script>` globals; these modules
//! bind to them and convert options with serde-wasm-bindgen. Every wrapper
//! reports a missing or failing library as `Err` instead of throwing.

pub mod aos;
pub mod emailjs;
pub mod glightbox;
pub mod isotope;
pub mod pure_counter;
pub mod swiper;
pub mod typed;

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Serialize an options struct into a plain JS object
fn to_js<T: Serialize>(options: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(options).map_err(|e| e.to_string())
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
