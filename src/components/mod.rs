//! UI Components
//!
//! Behaviours attached to the static page markup, plus the small Leptos
//! components they render.

mod certifications;
mod contact_form;
mod list_footer;
mod listing;
mod navbar;
mod page_effects;
mod stats_counters;
mod widgets;

pub use certifications::mount_certifications;
pub use contact_form::mount_contact_form;
pub use list_footer::ListFooter;
pub use listing::mount_listing;
pub use navbar::mount_navbar;
pub use page_effects::{mount_skills_reveal, remove_preloader};
pub use stats_counters::mount_stats_counters;
pub use widgets::init_widgets;
