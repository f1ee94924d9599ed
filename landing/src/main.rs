// CocoWangi Landing Site — Leptos 0.8 Edition
// Built in Banyuwangi by the CocoWangi team (c)2025

mod browser;
mod logging;
mod pages;
mod sections;
mod state;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::*;
use sections::*;
use state::{AppState, SiteData};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let data = match SiteData::embedded() {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(error = %err, "site data failed to load, nothing to render");
            return;
        }
    };

    leptos::mount::mount_to_body(move || view! { <App data=data.clone() /> });
}

#[component]
fn App(data: SiteData) -> impl IntoView {
    provide_context(AppState::new(data));

    view! {
        <Router>
            <Nav />
            <main class="site-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/track-record") view=TrackRecordPage />
                </Routes>
            </main>
            <Footer />
            <WhatsAppButton />
            <ToastHost />
        </Router>
    }
}
