use cocowangi::config::NavItem;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::use_app;

#[component]
pub fn Nav() -> impl IntoView {
    let app = use_app();
    let pathname = use_location().pathname;
    let (drawer_open, set_drawer_open) = signal(false);

    let (brand, items) = app.with_config(|config| {
        let items: Vec<NavItem> = config.active_navigation().cloned().collect();
        (config.company.name.clone(), items)
    });

    let link = move |item: NavItem, class: &'static str| {
        let href = item.href.clone();
        let target = item.href.clone();
        view! {
            <a
                href=href
                class=move || {
                    if pathname.get() == target {
                        format!("{class} active")
                    } else {
                        class.to_string()
                    }
                }
                on:click=move |_| set_drawer_open.set(false)
            >
                {move || item.label(app.lang()).to_string()}
            </a>
        }
    };

    let items = StoredValue::new(items);
    let links = move |class: &'static str| {
        items.with_value(|items| {
            items
                .iter()
                .cloned()
                .map(|item| link(item, class))
                .collect_view()
        })
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <div class="nav-logo">
                        <img src="assets/cocowangi-logo.svg" alt=brand.clone() />
                    </div>
                    <div class="nav-title-block">
                        <span class="nav-title">{brand}</span>
                        <span class="nav-subtitle">
                            {move || app.t("Premium Coconut Export", "Ekspor Kelapa Premium")}
                        </span>
                    </div>
                </a>
                <div class="nav-links">{links("nav-link")}</div>
                <div class="nav-actions">
                    <button
                        class="nav-lang"
                        title=move || app.t("Switch language", "Ganti bahasa")
                        on:click=move |_| app.toggle_language()
                    >
                        <span class="nav-lang-flag">{move || app.lang().flag()}</span>
                        <span class="nav-lang-code">{move || app.lang().switcher_label()}</span>
                    </button>
                    <button
                        class="nav-theme"
                        aria-label=move || app.t("Toggle dark mode", "Ganti mode gelap")
                        on:click=move |_| app.toggle_theme()
                    >
                        {move || if app.is_dark() { "☀" } else { "☾" }}
                    </button>
                    <button
                        class=move || if drawer_open.get() { "nav-menu active" } else { "nav-menu" }
                        aria-label=move || app.t("Menu", "Menu")
                        on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                    >
                        {move || if drawer_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile drawer
            <Show when=move || drawer_open.get()>
                <div class="nav-drawer">
                    <div class="nav-drawer-inner">{links("drawer-link")}</div>
                </div>
            </Show>
        </nav>
    }
}
