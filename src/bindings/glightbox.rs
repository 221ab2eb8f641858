//! GLightbox

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{js_error, to_js};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = GLightbox, catch)]
    fn glightbox(options: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
pub struct LightboxOptions {
    pub selector: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<&'static str>,
}

pub fn attach(options: &LightboxOptions) -> Result<(), String> {
    glightbox(&to_js(options)?).map(|_| ()).map_err(js_error)
}
