//! Certifications Grid
//!
//! Filter buttons rearrange the certifications grid through Isotope, which
//! hides the non-matching cards and closes the gaps they leave.

use portfolio_core::paginator::WILDCARD;
use web_sys::Element;

use crate::bindings::aos;
use crate::bindings::isotope::{Layout, LayoutOptions};
use crate::components::listing::activate_filter_button;
use crate::config::{
    CERTIFICATIONS_CONTAINER_SELECTOR, CERTIFICATIONS_FILTER_SELECTOR, CERTIFICATIONS_ITEM_SELECTOR,
};
use crate::dom;

/// Raw `data-filter` value passed to Isotope; missing means everything
fn filter_value(button: &Element) -> String {
    button
        .get_attribute("data-filter")
        .filter(|raw| !raw.trim().is_empty())
        .unwrap_or_else(|| WILDCARD.to_string())
}

/// Bind the grid once images have loaded, so Isotope measures real sizes
pub fn mount_certifications() {
    dom::on_load(|| {
        let Some(container) = dom::select(CERTIFICATIONS_CONTAINER_SELECTOR) else {
            log::debug!("certifications: no grid on this page");
            return;
        };
        let options = LayoutOptions {
            item_selector: CERTIFICATIONS_ITEM_SELECTOR,
        };
        let layout = match Layout::attach(&container, &options) {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("certifications: grid layout not initialised: {}", e);
                return;
            }
        };

        let refresh = layout.on_arrange_complete(|| {
            if let Err(e) = aos::refresh() {
                log::warn!("certifications: animation refresh failed: {}", e);
            }
        });
        if let Err(e) = refresh {
            log::warn!("certifications: arrangeComplete not bound: {}", e);
        }

        let buttons = dom::select_all(CERTIFICATIONS_FILTER_SELECTOR);
        for button in &buttons {
            let siblings = buttons.clone();
            let this = button.clone();
            let layout = layout.clone();
            dom::on(button, "click", move |ev| {
                ev.prevent_default();
                activate_filter_button(&siblings, &this);
                let filter = filter_value(&this);
                log::debug!("certifications: filter {}", filter);
                if let Err(e) = layout.arrange(&filter) {
                    log::warn!("certifications: arrange failed: {}", e);
                }
            });
        }
        log::info!("certifications: {} filters bound", buttons.len());
    });
}
