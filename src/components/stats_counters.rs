//! Stats Counters
//!
//! Loads booking statistics from the static stats file into the counter
//! elements, refreshing every few minutes. Fallback figures are shown when
//! the file cannot be loaded.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::task::spawn_local;
use portfolio_core::{Counter, StatsSnapshot, TopmateStats};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Response};

use crate::bindings::pure_counter::{self, CounterOptions};
use crate::config::{LOADING_TEXT, STATS_REFRESH_MS, STATS_URL};
use crate::dom;

fn counter_selector(counter: Counter) -> String {
    format!("[data-counter-id=\"{}\"]", counter.id())
}

fn counter_element(counter: Counter) -> Option<Element> {
    dom::select(&counter_selector(counter))
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn fetch_stats() -> Result<TopmateStats, String> {
    let window = dom::window().ok_or("no window")?;
    let response: Response = JsFuture::from(window.fetch_with_str(STATS_URL))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or("response body is not text")?;
    TopmateStats::from_json(&body).map_err(|e| e.to_string())
}

fn show(snapshot: &StatsSnapshot) {
    for counter in Counter::ALL {
        let Some(element) = counter_element(counter) else { continue };
        match snapshot.count(counter) {
            Some(end) => {
                let _ = element.set_attribute("data-purecounter-end", &end.to_string());
                let options = CounterOptions::counting_to(counter_selector(counter), end);
                if let Err(e) = pure_counter::start(&options) {
                    log::warn!("{} counter not started: {}", counter.id(), e);
                    element.set_text_content(Some(&end.to_string()));
                }
            }
            None => element.set_text_content(Some(&snapshot.rating_label())),
        }
    }
}

async fn refresh_stats() {
    let snapshot = match fetch_stats().await {
        Ok(stats) => {
            if stats.is_stale(now()) {
                log::warn!("Topmate stats are more than 24 hours old");
            }
            stats.snapshot()
        }
        Err(e) => {
            log::error!("Error fetching Topmate stats: {}", e);
            StatsSnapshot::fallback()
        }
    };
    show(&snapshot);
}

pub fn mount_stats_counters() {
    for counter in Counter::ANIMATED {
        if let Some(element) = counter_element(counter) {
            element.set_text_content(Some(LOADING_TEXT));
        }
    }

    spawn_local(refresh_stats());
    Interval::new(STATS_REFRESH_MS, || spawn_local(refresh_stats())).forget();
}
