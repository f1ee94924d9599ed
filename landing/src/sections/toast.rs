use leptos::prelude::*;

use crate::state::{ToastKind, use_app};

/// Renders the current toast, if any. Mounted once, next to the routes.
#[component]
pub fn ToastHost() -> impl IntoView {
    let app = use_app();

    move || {
        app.toast().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <div class="toast-text">
                        <strong class="toast-title">{toast.title}</strong>
                        <p class="toast-body">{toast.body}</p>
                    </div>
                    <button
                        class="toast-close"
                        aria-label=move || app.t("Close", "Tutup")
                        on:click=move |_| app.dismiss_toast()
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
