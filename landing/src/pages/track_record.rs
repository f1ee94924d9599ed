// Track record page - export destinations and customer stories
use leptos::prelude::*;

use crate::sections::TestimonialCard;
use crate::state::use_app;

const HEADLINE_PRODUCTS: usize = 2;

#[component]
pub fn TrackRecordPage() -> impl IntoView {
    let app = use_app();
    let company = app.with_config(|config| config.company.clone());
    let (countries, testimonials) = app.with_content(|content| {
        (content.countries.to_vec(), content.testimonials.to_vec())
    });

    let stats = [
        (company.countries.clone(), ("Countries Served", "Negara Dilayani")),
        (company.annual_capacity.clone(), ("Annual Capacity", "Kapasitas Tahunan")),
        (testimonials.len().to_string(), ("Customer Stories", "Kisah Pelanggan")),
    ]
    .into_iter()
    .map(|(value, (en, id))| {
        view! {
            <div class="stat">
                <span class="stat-value">{value}</span>
                <span class="stat-label">{move || app.t(en, id)}</span>
            </div>
        }
    })
    .collect_view();

    let destinations = countries
        .into_iter()
        .map(|country| {
            let products = country
                .headline_products(HEADLINE_PRODUCTS)
                .iter()
                .cloned()
                .map(|product| view! { <span class="country-product">{product}</span> })
                .collect_view();
            view! {
                <div class="country-card">
                    <span class="country-flag">{country.flag}</span>
                    <h3>{country.name}</h3>
                    <p class="country-volume">{country.export_volume}</p>
                    <p class="country-products-label">{move || app.t("Top products:", "Produk utama:")}</p>
                    <div class="country-products">{products}</div>
                </div>
            }
        })
        .collect_view();

    let stories = testimonials
        .into_iter()
        .map(|testimonial| view! { <TestimonialCard testimonial /> })
        .collect_view();

    view! {
        <section class="page-header">
            <div class="container">
                <h1>{move || app.t("Export Track Record", "Rekam Jejak Ekspor")}</h1>
                <div class="stats">{stats}</div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="section-title">{move || app.t("Global Reach", "Jangkauan Global")}</h2>
                <div class="country-grid">{destinations}</div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title">
                    {move || app.t("Customer Success Stories", "Kisah Sukses Pelanggan")}
                </h2>
                <div class="testimonial-grid">{stories}</div>
            </div>
        </section>

        <section class="section cta">
            <div class="container">
                <h2>{move || app.t("Ready to Join Our Success Story?", "Siap Bergabung dengan Kisah Sukses Kami?")}</h2>
                <div class="hero-actions">
                    <a href="/contact" class="btn btn-primary">{move || app.t("Start Your Order", "Mulai Pesanan Anda")}</a>
                    <a href="/products" class="btn btn-outline">{move || app.t("View Products", "Lihat Produk")}</a>
                </div>
            </div>
        </section>
    }
}
