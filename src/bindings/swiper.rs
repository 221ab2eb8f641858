//! Swiper

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{js_error, to_js};

#[wasm_bindgen]
extern "C" {
    type Swiper;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Swiper, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Serialize)]
pub struct Pagination {
    pub el: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub clickable: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperOptions {
    pub speed: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: Autoplay,
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_per_view: Option<&'static str>,
}

impl SwiperOptions {
    /// Looping autoplay slider with clickable bullets
    pub fn autoplay(speed: u32) -> Self {
        Self {
            speed,
            looped: true,
            autoplay: Autoplay {
                delay: 5000,
                disable_on_interaction: false,
            },
            pagination: Pagination {
                el: ".swiper-pagination",
                kind: "bullets",
                clickable: true,
            },
            slides_per_view: None,
        }
    }
}

pub fn attach(selector: &str, options: &SwiperOptions) -> Result<(), String> {
    Swiper::new(selector, &to_js(options)?).map(|_| ()).map_err(js_error)
}
