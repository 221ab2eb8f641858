//! Portfolio Frontend App
//!
//! Root component. The page itself is static markup; the app binds every
//! interactive section to it and renders nothing of its own.

use leptos::prelude::*;

use crate::components::{
    init_widgets, mount_certifications, mount_contact_form, mount_listing, mount_navbar,
    mount_skills_reveal, mount_stats_counters, remove_preloader,
};
use crate::config::LISTINGS;
use crate::dom;

#[component]
pub fn App() -> impl IntoView {
    remove_preloader();
    mount_navbar();
    init_widgets();
    mount_contact_form();
    mount_certifications();

    dom::on_ready(|| {
        for listing in LISTINGS {
            mount_listing(listing);
        }
        mount_skills_reveal();
        mount_stats_counters();
        log::info!("page bound");
    });
}
