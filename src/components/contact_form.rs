//! Contact Form
//!
//! Sends the contact form through EmailJS and shows a short-lived
//! confirmation.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::bindings::emailjs;
use crate::config::{EMAILJS, SENT_MESSAGE, SENT_MESSAGE_MS, SENT_MESSAGE_SELECTOR};
use crate::dom;

pub fn mount_contact_form() {
    let Some(form) = dom::select(EMAILJS.form_selector).and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("no contact form on this page");
        return;
    };
    let message = dom::select(SENT_MESSAGE_SELECTOR);

    let target = form.clone();
    dom::on(&form, "submit", move |ev| {
        ev.prevent_default();
        let form = target.clone();
        let message = message.clone();
        spawn_local(async move {
            if let Err(e) = emailjs::send_form(&EMAILJS).await {
                log::error!("failed to send contact form: {}", e);
                return;
            }
            log::info!("contact form sent");
            form.reset();

            let Some(message) = message else { return };
            message.set_text_content(Some(SENT_MESSAGE));
            TimeoutFuture::new(SENT_MESSAGE_MS).await;
            message.set_text_content(Some(""));
        });
    });
}
