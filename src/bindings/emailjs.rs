//! EmailJS

use wasm_bindgen::prelude::*;

use super::js_error;
use crate::config::EmailJsConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = sendForm, catch)]
    async fn email_send_form(
        service_id: &str,
        template_id: &str,
        form: &str,
        public_key: &str,
    ) -> Result<JsValue, JsValue>;
}

/// Submit the configured form through EmailJS
pub async fn send_form(config: &EmailJsConfig) -> Result<(), String> {
    email_send_form(
        config.service_id,
        config.template_id,
        config.form_selector,
        config.public_key,
    )
    .await
    .map(|_| ())
    .map_err(js_error)
}
