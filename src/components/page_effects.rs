//! Page Effects
//!
//! Preloader removal and the one-shot skills bar reveal.

use std::cell::Cell;
use std::rc::Rc;

use portfolio_core::scroll::reached_viewport;

use crate::config::{PRELOADER_SELECTOR, SKILLS_BOX_SELECTOR, SKILLS_SECTION_SELECTOR, VISIBLE_CLASS};
use crate::dom;

pub fn remove_preloader() {
    dom::on_load(|| {
        if let Some(preloader) = dom::select(PRELOADER_SELECTOR) {
            preloader.remove();
        }
    });
}

/// Fill the skill bars once their section scrolls into view
pub fn mount_skills_reveal() {
    let Some(section) = dom::select(SKILLS_SECTION_SELECTOR) else { return };
    let revealed = Rc::new(Cell::new(false));

    let check = move || {
        if revealed.get() {
            return;
        }
        let top = section.get_bounding_client_rect().top();
        if reached_viewport(top, dom::viewport_height()) {
            revealed.set(true);
            for skill in dom::select_all(SKILLS_BOX_SELECTOR) {
                dom::set_class(&skill, VISIBLE_CLASS, true);
            }
            log::debug!("skills revealed");
        }
    };
    check();
    dom::on_scroll(check);
}
