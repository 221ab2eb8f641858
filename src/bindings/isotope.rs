//! Isotope

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::{js_error, to_js};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type Isotope;

    #[wasm_bindgen(constructor, catch)]
    fn new(container: &Element, options: &JsValue) -> Result<Isotope, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn arrange(this: &Isotope, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = on, catch)]
    fn on(this: &Isotope, event: &str, listener: &js_sys::Function) -> Result<(), JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub item_selector: &'static str,
}

#[derive(Serialize)]
pub struct ArrangeOptions<'a> {
    /// Selector items must match, `*` for all
    pub filter: &'a str,
}

/// Filterable grid managed by Isotope
#[derive(Clone)]
pub struct Layout {
    inner: Isotope,
}

impl Layout {
    pub fn attach(container: &Element, options: &LayoutOptions) -> Result<Self, String> {
        let inner = Isotope::new(container, &to_js(options)?).map_err(js_error)?;
        Ok(Self { inner })
    }

    /// Show only items matching `filter` and re-lay out the grid
    pub fn arrange(&self, filter: &str) -> Result<(), String> {
        self.inner
            .arrange(&to_js(&ArrangeOptions { filter })?)
            .map_err(js_error)
    }

    /// Run `f` after every finished arrangement
    pub fn on_arrange_complete(&self, f: impl FnMut() + 'static) -> Result<(), String> {
        let callback = Closure::<dyn FnMut()>::new(f);
        let result = self
            .inner
            .on("arrangeComplete", callback.as_ref().unchecked_ref())
            .map_err(js_error);
        callback.forget();
        result
    }
}
