//! Portfolio Frontend Entry Point

mod app;
mod bindings;
mod components;
mod config;
mod dom;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::LOG_LEVEL);
    mount_to_body(App);
}
