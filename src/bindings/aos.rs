//! Animate On Scroll

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{js_error, to_js};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = AOS, js_name = refresh, catch)]
    fn aos_refresh() -> Result<(), JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AosOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub mirror: bool,
}

pub const DEFAULT_OPTIONS: AosOptions = AosOptions {
    duration: 1000,
    easing: "ease-in-out",
    once: true,
    mirror: false,
};

pub fn init(options: &AosOptions) -> Result<(), String> {
    aos_init(&to_js(options)?).map_err(js_error)
}

/// Recalculate element positions after a layout change
pub fn refresh() -> Result<(), String> {
    aos_refresh().map_err(js_error)
}
