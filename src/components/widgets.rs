//! Vendor Widgets
//!
//! One-time setup of the hero typing effect, lightboxes, sliders, scroll
//! animations and static counters. A widget whose library or markup is
//! missing is logged and skipped.

use crate::bindings::aos::{self, DEFAULT_OPTIONS};
use crate::bindings::glightbox::{self, LightboxOptions};
use crate::bindings::pure_counter;
use crate::bindings::swiper::{self, SwiperOptions};
use crate::bindings::typed::{self, TypedOptions};
use crate::dom;

const TYPED_SELECTOR: &str = ".typed";

const LIGHTBOXES: &[LightboxOptions] = &[
    LightboxOptions {
        selector: ".certifications-lightbox",
        width: None,
        height: None,
    },
    LightboxOptions {
        selector: ".certifications-details-lightbox",
        width: Some("90%"),
        height: Some("90vh"),
    },
];

fn report(widget: &str, result: Result<(), String>) {
    if let Err(e) = result {
        log::warn!("{} not initialised: {}", widget, e);
    }
}

fn init_typed() {
    let Some(hero) = dom::select(TYPED_SELECTOR) else { return };
    let items = typed::parse_items(&hero.get_attribute("data-typed-items").unwrap_or_default());
    if items.is_empty() {
        log::warn!("typed: no data-typed-items on {}", TYPED_SELECTOR);
        return;
    }
    report("typed", typed::attach(TYPED_SELECTOR, &TypedOptions::looping(items)));
}

fn init_sliders() {
    report(
        "certifications slider",
        swiper::attach(".certifications-details-slider", &SwiperOptions::autoplay(400)),
    );
    report(
        "testimonials slider",
        swiper::attach(
            ".testimonials-slider",
            &SwiperOptions {
                slides_per_view: Some("auto"),
                ..SwiperOptions::autoplay(600)
            },
        ),
    );
}

pub fn init_widgets() {
    init_typed();
    for lightbox in LIGHTBOXES {
        report(lightbox.selector, glightbox::attach(lightbox));
    }
    init_sliders();
    report("purecounter", pure_counter::init_all());
    dom::on_load(|| report("aos", aos::init(&DEFAULT_OPTIONS)));
}
