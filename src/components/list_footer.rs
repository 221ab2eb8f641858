//! List Footer Component
//!
//! End-of-list message rendered into a listing's message region.

use leptos::prelude::*;

use crate::config::EndMessage;

#[component]
pub fn ListFooter(end_reached: ReadSignal<bool>, message: EndMessage) -> impl IntoView {
    view! {
        <Show when=move || end_reached.get()>
            <p>
                {message.lead}
                " Follow me on "
                <a href=message.link_url target="_blank">
                    <i class="bx bx-link-external"></i>
                    " "
                    {message.link_label}
                </a>
                " for more updates!"
            </p>
        </Show>
    }
}
