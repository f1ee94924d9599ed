use cocowangi::links;
use leptos::prelude::*;

use crate::browser::open_external;
use crate::state::{ToastKind, use_app};

/// Floating chat button opening WhatsApp with a greeting in the current
/// language.
#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let app = use_app();
    let base = app.with_config(|config| config.social.whatsapp.clone());

    let open_chat = move |_| {
        let url = links::whatsapp(&base, links::greeting_message(app.lang()));
        if let Err(err) = open_external(&url) {
            tracing::warn!(error = %err, "whatsapp chat did not open");
            app.notify(
                ToastKind::Error,
                app.t("Could not open WhatsApp", "Tidak dapat membuka WhatsApp"),
                app.t(
                    "Please allow popups for this site or message us directly.",
                    "Izinkan popup untuk situs ini atau hubungi kami langsung.",
                ),
            );
        }
    };

    view! {
        <button
            class="whatsapp-float"
            title=move || app.t("Chat with us on WhatsApp", "Chat dengan kami di WhatsApp")
            on:click=open_chat
        >
            <img src="assets/whatsapp.svg" alt="WhatsApp" />
        </button>
    }
}
