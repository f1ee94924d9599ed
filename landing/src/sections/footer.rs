use cocowangi::config::NavItem;
use cocowangi::links;
use leptos::prelude::*;

use crate::state::use_app;

#[component]
pub fn Footer() -> impl IntoView {
    let app = use_app();
    let (company, social, certifications, navigation) = app.with_config(|config| {
        (
            config.company.clone(),
            config.social.clone(),
            config.certifications.clone(),
            config.active_navigation().cloned().collect::<Vec<NavItem>>(),
        )
    });

    let quick_links = navigation
        .into_iter()
        .map(|item| {
            let href = item.href.clone();
            view! {
                <li>
                    <a href=href class="footer-link">
                        {move || item.label(app.lang()).to_string()}
                    </a>
                </li>
            }
        })
        .collect_view();

    let stats = [
        (("Established", "Didirikan"), company.established.clone()),
        (("Employees", "Karyawan"), company.employees.clone()),
        (("Export Countries", "Negara Ekspor"), company.countries.clone()),
        (("Annual Capacity", "Kapasitas Tahunan"), company.annual_capacity.clone()),
    ]
    .into_iter()
    .map(|((en, id), value)| {
        view! {
            <div class="footer-stat">
                <span class="footer-stat-value">{value}</span>
                <span class="footer-stat-label">{move || app.t(en, id)}</span>
            </div>
        }
    })
    .collect_view();

    let badges = certifications
        .into_iter()
        .map(|cert| view! { <span class="cert-badge">{cert}</span> })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="footer-title">{company.name.clone()}</span>
                    <p class="footer-description">
                        {move || app.with_config(|config| config.description(app.lang()).to_string())}
                    </p>
                    <a href=social.instagram target="_blank" class="footer-link">"Instagram"</a>
                </div>
                <div class="footer-column">
                    <h4>{move || app.t("Quick Links", "Tautan Cepat")}</h4>
                    <ul>{quick_links}</ul>
                </div>
                <div class="footer-column">
                    <h4>{move || app.t("Contact Info", "Info Kontak")}</h4>
                    <a href=links::maps_search(&company.address) target="_blank" class="footer-link">
                        {company.address.clone()}
                    </a>
                    <a href=links::tel(&company.phone) class="footer-link">{company.phone.clone()}</a>
                    <a href=links::mailto(&company.email) class="footer-link">{company.email.clone()}</a>
                </div>
                <div class="footer-column">
                    <h4>{move || app.t("Company Stats", "Statistik Perusahaan")}</h4>
                    <div class="footer-stats">{stats}</div>
                </div>
            </div>
            <div class="container footer-certs">
                <h4>{move || app.t("Certifications & Standards", "Sertifikasi & Standar")}</h4>
                <div class="cert-badges">{badges}</div>
            </div>
            <p class="footer-copyright">
                "© 2025 " {company.name.clone()} ". "
                {move || app.t("All rights reserved.", "Semua hak dilindungi.")}
            </p>
        </footer>
    }
}
