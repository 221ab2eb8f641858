//! Listing Binding
//!
//! Attaches a [`ListPaginator`] to a pre-rendered listing section: filter
//! buttons narrow it, the "see more" button reveals it, and an effect pushes
//! every state change back into the markup.

use leptos::mount::mount_to;
use leptos::prelude::*;
use portfolio_core::{Filter, ListItem, ListPaginator, ListPresenter};
use web_sys::{Element, HtmlElement};

use crate::components::ListFooter;
use crate::config::{
    ListingConfig, FILTER_ACTIVE_CLASS, FILTER_HIDE_CLASS, FILTER_SHOW_CLASS, STATE_CLASSES,
    VISIBLE_CLASS,
};
use crate::dom;

/// Applies paginator state to listing elements
struct DomListPresenter {
    items: Vec<Element>,
    control: Option<HtmlElement>,
    end_reached: RwSignal<bool>,
    /// Only filterable listings get `filter-show` / `filter-hide`
    filterable: bool,
}

impl ListPresenter for DomListPresenter {
    fn set_item_visible(&mut self, index: usize, visible: bool) {
        if let Some(item) = self.items.get(index) {
            dom::set_class(item, VISIBLE_CLASS, visible);
        }
    }

    fn set_item_matched(&mut self, index: usize, matched: bool) {
        if !self.filterable {
            return;
        }
        if let Some(item) = self.items.get(index) {
            dom::set_class(item, FILTER_SHOW_CLASS, matched);
            dom::set_class(item, FILTER_HIDE_CLASS, !matched);
        }
    }

    fn set_reveal_control_visible(&mut self, visible: bool) {
        if let Some(control) = &self.control {
            dom::set_displayed(control, visible);
        }
    }

    fn set_end_reached(&mut self, reached: bool) {
        if self.end_reached.get_untracked() != reached {
            self.end_reached.set(reached);
        }
    }
}

fn read_item(element: &Element) -> ListItem {
    let class_name = element.class_name();
    ListItem::new(dom::tags_from_classes(&class_name, STATE_CLASSES))
}

/// Bind one listing section; sections missing from the page are skipped
pub fn mount_listing(config: &'static ListingConfig) {
    let elements = dom::select_all(config.item_selector);
    if elements.is_empty() {
        log::debug!("{}: no items on this page", config.name);
        return;
    }

    let items = elements.iter().map(read_item).collect();
    let state = RwSignal::new(ListPaginator::new(items, config.page));
    let end_reached = RwSignal::new(false);
    let control = config.control_selector.and_then(dom::select_html);

    let mut presenter = DomListPresenter {
        items: elements,
        control: control.clone(),
        end_reached,
        filterable: config.filter_selector.is_some(),
    };

    Effect::new(move |_| {
        state.with(|paginator| paginator.present(&mut presenter));
    });

    if let Some(selector) = config.filter_selector {
        bind_filters(config.name, selector, state);
    }

    if let Some(control) = control {
        dom::on(&control, "click", move |_| {
            state.update(|paginator| {
                paginator.reveal_next();
            });
        });
    }

    if let (Some(selector), Some(message)) = (config.message_selector, config.end_message) {
        match dom::select_html(selector) {
            Some(region) => {
                let end_reached = end_reached.read_only();
                mount_to(region, move || view! { <ListFooter end_reached=end_reached message=message /> })
                    .forget();
            }
            None => log::warn!("{}: message region {} not found", config.name, selector),
        }
    }

    state.with_untracked(|paginator| {
        log::info!(
            "{}: {} items, {} visible",
            config.name,
            paginator.len(),
            paginator.revealed()
        );
    });
}

/// Move the `filter-active` class to `active`
pub fn activate_filter_button(buttons: &[Element], active: &Element) {
    for button in buttons {
        dom::set_class(button, FILTER_ACTIVE_CLASS, false);
    }
    dom::set_class(active, FILTER_ACTIVE_CLASS, true);
}

/// Filter buttons: mark the clicked one active and re-filter the listing
fn bind_filters(name: &'static str, selector: &str, state: RwSignal<ListPaginator>) {
    let buttons = dom::select_all(selector);
    if buttons.is_empty() {
        log::warn!("{}: no filter buttons match {}", name, selector);
    }

    for button in &buttons {
        let siblings = buttons.clone();
        let this = button.clone();
        dom::on(button, "click", move |ev| {
            ev.prevent_default();
            activate_filter_button(&siblings, &this);

            let filter = Filter::parse(&this.get_attribute("data-filter").unwrap_or_default());
            log::debug!("{}: filter {:?}", name, filter);
            state.update(|paginator| {
                paginator.set_filter(filter);
            });
        });
    }
}
