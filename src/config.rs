//! Site Configuration
//!
//! Selectors, page sizes and third-party identifiers the frontend binds to.

use log::LevelFilter;
use portfolio_core::PageConfig;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ========================
// Listings
// ========================

/// Class marking an item as revealed
pub const VISIBLE_CLASS: &str = "visible";
/// Classes marking whether an item passes the active filter
pub const FILTER_SHOW_CLASS: &str = "filter-show";
pub const FILTER_HIDE_CLASS: &str = "filter-hide";
/// Class on the selected filter button
pub const FILTER_ACTIVE_CLASS: &str = "filter-active";
/// Item classes toggled at runtime; every other item class is a filter tag
pub const STATE_CLASSES: &[&str] = &[VISIBLE_CLASS, FILTER_SHOW_CLASS, FILTER_HIDE_CLASS];

/// Text shown once a listing has been revealed to its end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndMessage {
    pub lead: &'static str,
    pub link_label: &'static str,
    pub link_url: &'static str,
}

/// Markup and paging of one listing section
#[derive(Debug, Clone, Copy)]
pub struct ListingConfig {
    pub name: &'static str,
    pub item_selector: &'static str,
    /// Filter buttons carrying `data-filter`; `None` for unfiltered listings
    pub filter_selector: Option<&'static str>,
    /// "See more" button
    pub control_selector: Option<&'static str>,
    /// Region receiving the end-of-list message
    pub message_selector: Option<&'static str>,
    pub end_message: Option<EndMessage>,
    pub page: PageConfig,
}

pub const PROJECTS: ListingConfig = ListingConfig {
    name: "projects",
    item_selector: ".projects-item",
    filter_selector: None,
    control_selector: Some("#projects-see-more-btn"),
    message_selector: Some("#projects-follow-message"),
    end_message: Some(EndMessage {
        lead: "You've reached the end of the projects.",
        link_label: "Github",
        link_url: "https://github.com/TharunKumarReddyPolu",
    }),
    page: PageConfig::PROJECTS,
};

pub const BLOGS: ListingConfig = ListingConfig {
    name: "blogs",
    item_selector: ".blog-item",
    filter_selector: Some("#blog-flters li"),
    control_selector: Some("#blogs-see-more-btn"),
    message_selector: Some("#blogs-follow-message"),
    end_message: Some(EndMessage {
        lead: "You've reached the end of the blogs.",
        link_label: "Medium",
        link_url: "https://medium.com/@TharunKumarReddyPolu",
    }),
    page: PageConfig::BLOGS,
};

pub const LISTINGS: &[ListingConfig] = &[PROJECTS, BLOGS];

// ========================
// Certifications grid
// ========================

pub const CERTIFICATIONS_CONTAINER_SELECTOR: &str = ".certifications-container";
pub const CERTIFICATIONS_ITEM_SELECTOR: &str = ".certifications-item";
pub const CERTIFICATIONS_FILTER_SELECTOR: &str = "#certifications-flters li";

// ========================
// Navigation
// ========================

pub const NAV_LINK_SELECTOR: &str = "#navbar .scrollto";
pub const SCROLL_LINK_SELECTOR: &str = ".scrollto";
pub const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
pub const MOBILE_TOGGLE_SELECTOR: &str = ".mobile-nav-toggle";
pub const MOBILE_NAV_ACTIVE_CLASS: &str = "mobile-nav-active";
pub const MOBILE_ICON_OPEN_CLASS: &str = "bi-list";
pub const MOBILE_ICON_CLOSE_CLASS: &str = "bi-x";
pub const ACTIVE_CLASS: &str = "active";

// ========================
// Page effects
// ========================

pub const PRELOADER_SELECTOR: &str = "#preloader";
pub const SKILLS_SECTION_SELECTOR: &str = ".skills_content";
pub const SKILLS_BOX_SELECTOR: &str = ".skills_box";

// ========================
// Contact form
// ========================

/// EmailJS account used to deliver contact form submissions
#[derive(Debug, Clone, Copy)]
pub struct EmailJsConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub form_selector: &'static str,
    pub public_key: &'static str,
}

pub const EMAILJS: EmailJsConfig = EmailJsConfig {
    service_id: "service_5wfiny6",
    template_id: "template_gsx9en1",
    form_selector: "#contact-form",
    public_key: "iR4cVRwdc3xjdn0cT",
};

pub const SENT_MESSAGE_SELECTOR: &str = "#sent-message";
pub const SENT_MESSAGE: &str = "Your message has been sent. Thank you!";
pub const SENT_MESSAGE_MS: u32 = 5_000;

// ========================
// Stats counters
// ========================

pub const STATS_URL: &str = "/assets/data/topmate_stats.json";
pub const STATS_REFRESH_MS: u32 = 300_000;
pub const LOADING_TEXT: &str = "Loading...";
