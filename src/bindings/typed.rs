//! Typed.js

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{js_error, to_js};

#[wasm_bindgen]
extern "C" {
    type Typed;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Typed, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedOptions {
    pub strings: Vec<String>,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
}

impl TypedOptions {
    pub fn looping(strings: Vec<String>) -> Self {
        Self {
            strings,
            looped: true,
            type_speed: 100,
            back_speed: 50,
            back_delay: 2000,
        }
    }
}

/// Parse a `data-typed-items` attribute: comma separated phrases, kept
/// verbatim since Typed prints their spacing. A blank attribute has none.
pub fn parse_items(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(String::from).collect()
}

pub fn attach(selector: &str, options: &TypedOptions) -> Result<(), String> {
    Typed::new(selector, &to_js(options)?).map(|_| ()).map_err(js_error)
}
