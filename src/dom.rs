//! DOM Helpers
//!
//! Thin wrappers over web-sys for querying the static page markup and
//! attaching listeners to it.

use leptos::prelude::Owner;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// First element matching `selector`; invalid selectors match nothing
pub fn select(selector: &str) -> Option<Element> {
    document()?.query_selector(selector.trim()).ok().flatten()
}

/// All elements matching `selector`, in document order
pub fn select_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector.trim()).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_html(selector: &str) -> Option<HtmlElement> {
    select(selector)?.dyn_into::<HtmlElement>().ok()
}

/// Attach a listener that lives as long as the page
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("failed to bind {}: {:?}", event, e);
    }
    callback.forget();
}

pub fn on_scroll(handler: impl FnMut() + 'static) {
    let mut handler = handler;
    if let Some(doc) = document() {
        on(&doc, "scroll", move |_| handler());
    }
}

/// Run `f` once the document is parsed (immediately if it already is)
pub fn on_ready(f: impl FnOnce() + 'static) {
    run_when("DOMContentLoaded", |state| state != "loading", f);
}

/// Run `f` once the page and its resources have loaded (immediately if they have)
pub fn on_load(f: impl FnOnce() + 'static) {
    run_when("load", |state| state == "complete", f);
}

fn run_when(event: &str, ready: impl Fn(&str) -> bool, f: impl FnOnce() + 'static) {
    let Some(win) = window() else { return };
    let state = win.document().map(|doc| doc.ready_state()).unwrap_or_default();
    if ready(&state) {
        f();
        return;
    }

    // Keep signals and effects created later under the current reactive owner
    let owner = Owner::current();
    let callback = Closure::once_into_js(move || match owner {
        Some(owner) => owner.with(f),
        None => f(),
    });
    // DOMContentLoaded bubbles from the document up to the window
    if let Err(e) = win.add_event_listener_with_callback(event, callback.unchecked_ref()) {
        log::warn!("failed to bind {}: {:?}", event, e);
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn flip_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Show (`display: block`) or hide (`display: none`) an element
pub fn set_displayed(el: &HtmlElement, displayed: bool) {
    let value = if displayed { "block" } else { "none" };
    let _ = el.style().set_property("display", value);
}

pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll the window to `top`
pub fn scroll_to(top: f64) {
    let Some(win) = window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Category tags carried in an element's class list: every class except the
/// ones toggled at runtime, so `data-filter=".tutorial"` matches `tutorial`
pub fn tags_from_classes<'a>(class_name: &'a str, state_classes: &[&str]) -> Vec<&'a str> {
    class_name
        .split_whitespace()
        .filter(|class| !state_classes.contains(class))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE: &[&str] = &["visible", "filter-show", "filter-hide"];

    #[test]
    fn test_tags_from_classes() {
        let classes = "col-lg-4 blog-item filter-tutorial  tutorial filter-show visible";
        let tags = tags_from_classes(classes, STATE);
        assert_eq!(tags, vec!["col-lg-4", "blog-item", "filter-tutorial", "tutorial"]);
    }

    #[test]
    fn test_tags_from_classes_ignores_state_only() {
        assert!(tags_from_classes("visible filter-hide", STATE).is_empty());
        assert!(tags_from_classes("", STATE).is_empty());
    }
}
