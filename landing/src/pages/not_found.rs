use leptos::prelude::*;

use crate::state::use_app;

#[component]
pub fn NotFound() -> impl IntoView {
    let app = use_app();

    view! {
        <section class="section not-found">
            <div class="container">
                <h1>"404"</h1>
                <p>{move || app.t("Page not found.", "Halaman tidak ditemukan.")}</p>
                <a href="/" class="btn btn-primary">{move || app.t("Back to Home", "Kembali ke Beranda")}</a>
            </div>
        </section>
    }
}
