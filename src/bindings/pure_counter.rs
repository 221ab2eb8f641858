//! PureCounter

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{js_error, to_js};

#[wasm_bindgen]
extern "C" {
    type PureCounter;

    #[wasm_bindgen(constructor, catch)]
    fn new() -> Result<PureCounter, JsValue>;

    #[wasm_bindgen(constructor, catch)]
    fn with_options(options: &JsValue) -> Result<PureCounter, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterOptions {
    pub selector: String,
    pub start: u64,
    pub end: u64,
    /// Seconds
    pub duration: u32,
    /// Milliseconds between frames
    pub delay: u32,
    pub once: bool,
    pub repeat: bool,
    pub decimals: u32,
    pub legacy: bool,
}

impl CounterOptions {
    /// Count from zero to `end` over three seconds, once
    pub fn counting_to(selector: String, end: u64) -> Self {
        Self {
            selector,
            start: 0,
            end,
            duration: 3,
            delay: 10,
            once: true,
            repeat: false,
            decimals: 0,
            legacy: true,
        }
    }
}

/// Initialise every `.purecounter` element on the page
pub fn init_all() -> Result<(), String> {
    PureCounter::new().map(|_| ()).map_err(js_error)
}

pub fn start(options: &CounterOptions) -> Result<(), String> {
    PureCounter::with_options(&to_js(options)?).map(|_| ()).map_err(js_error)
}
