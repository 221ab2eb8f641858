//! Navbar Behaviour
//!
//! Scroll-spy highlighting, back-to-top button, mobile menu toggle and
//! smooth scrolling for in-page links.

use portfolio_core::scroll::{back_to_top_visible, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement};

use crate::config::{
    ACTIVE_CLASS, BACK_TO_TOP_SELECTOR, MOBILE_ICON_CLOSE_CLASS, MOBILE_ICON_OPEN_CLASS,
    MOBILE_NAV_ACTIVE_CLASS, MOBILE_TOGGLE_SELECTOR, NAV_LINK_SELECTOR, SCROLL_LINK_SELECTOR,
};
use crate::dom;

/// Section an in-page link points at, if it exists on this page
fn link_target(hash: &str) -> Option<HtmlElement> {
    if hash.is_empty() {
        return None;
    }
    dom::select_html(hash)
}

fn anchors(selector: &str) -> Vec<HtmlAnchorElement> {
    dom::select_all(selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .collect()
}

fn scroll_to_section(section: &HtmlElement) {
    dom::scroll_to(section.offset_top() as f64);
}

fn bind_scroll_spy() {
    let links = anchors(NAV_LINK_SELECTOR);
    if links.is_empty() {
        return;
    }
    let highlight = move || {
        let scroll_y = dom::scroll_y();
        for link in &links {
            let Some(section) = link_target(&link.hash()) else { continue };
            let bounds = SectionBounds::new(section.offset_top() as f64, section.offset_height() as f64);
            dom::set_class(link, ACTIVE_CLASS, bounds.is_active(scroll_y));
        }
    };
    dom::on_load(highlight.clone());
    dom::on_scroll(highlight);
}

fn bind_back_to_top() {
    let Some(button) = dom::select(BACK_TO_TOP_SELECTOR) else { return };
    let toggle = move || dom::set_class(&button, ACTIVE_CLASS, back_to_top_visible(dom::scroll_y()));
    dom::on_load(toggle.clone());
    dom::on_scroll(toggle);
}

/// Swap the hamburger / close icon classes on the toggle
fn flip_toggle_icon(toggle: &web_sys::Element) {
    dom::flip_class(toggle, MOBILE_ICON_OPEN_CLASS);
    dom::flip_class(toggle, MOBILE_ICON_CLOSE_CLASS);
}

fn bind_mobile_toggle() {
    let Some(toggle) = dom::select(MOBILE_TOGGLE_SELECTOR) else { return };
    let this = toggle.clone();
    dom::on(&toggle, "click", move |_| {
        if let Some(body) = dom::body() {
            dom::flip_class(&body, MOBILE_NAV_ACTIVE_CLASS);
        }
        flip_toggle_icon(&this);
    });
}

/// In-page links scroll smoothly and close the mobile menu first
fn bind_scroll_links() {
    for link in anchors(SCROLL_LINK_SELECTOR) {
        let this = link.clone();
        dom::on(&link, "click", move |ev| {
            let Some(section) = link_target(&this.hash()) else { return };
            ev.prevent_default();

            if let Some(body) = dom::body() {
                if dom::has_class(&body, MOBILE_NAV_ACTIVE_CLASS) {
                    dom::set_class(&body, MOBILE_NAV_ACTIVE_CLASS, false);
                    if let Some(toggle) = dom::select(MOBILE_TOGGLE_SELECTOR) {
                        flip_toggle_icon(&toggle);
                    }
                }
            }
            scroll_to_section(&section);
        });
    }
}

/// Honour a `#section` in the URL once the layout has settled
fn scroll_to_location_hash() {
    dom::on_load(|| {
        let hash = dom::window()
            .and_then(|win| win.location().hash().ok())
            .unwrap_or_default();
        if let Some(section) = link_target(&hash) {
            scroll_to_section(&section);
        }
    });
}

pub fn mount_navbar() {
    bind_scroll_spy();
    bind_back_to_top();
    bind_mobile_toggle();
    bind_scroll_links();
    scroll_to_location_hash();
}
