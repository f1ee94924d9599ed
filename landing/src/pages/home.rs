// Home page - hero, featured catalog slice, testimonials
use cocowangi::content::{FEATURED_PRODUCTS, FEATURED_TESTIMONIALS};
use leptos::prelude::*;

use crate::sections::{ProductCard, TestimonialCard};
use crate::state::use_app;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();

    let (company, certifications) =
        app.with_config(|config| (config.company.clone(), config.certifications.clone()));
    let (featured, testimonials) = app.with_content(|content| {
        (
            content.featured_products(FEATURED_PRODUCTS).to_vec(),
            content.featured_testimonials(FEATURED_TESTIMONIALS).to_vec(),
        )
    });

    let stats = [
        (company.annual_capacity.clone(), ("Annual Capacity", "Kapasitas Tahunan")),
        (company.countries.clone(), ("Export Countries", "Negara Ekspor")),
        (company.employees.clone(), ("Expert Team", "Tim Ahli")),
        (certifications.len().to_string(), ("Certifications", "Sertifikasi")),
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

    let reasons = [
        (
            ("Premium Quality", "Kualitas Premium"),
            (
                "Every shipment is graded and documented to the buyer's specification.",
                "Setiap pengiriman disortir dan didokumentasikan sesuai spesifikasi pembeli.",
            ),
        ),
        (
            ("Global Reach", "Jangkauan Global"),
            (
                "Established logistics to buyers across Asia, the Middle East and beyond.",
                "Logistik yang mapan ke pembeli di Asia, Timur Tengah dan sekitarnya.",
            ),
        ),
        (
            ("Expert Team", "Tim Ahli"),
            (
                "Experienced staff from husk processing to export paperwork.",
                "Tim berpengalaman dari pengolahan sabut hingga dokumen ekspor.",
            ),
        ),
    ]
    .into_iter()
    .map(|((title_en, title_id), (body_en, body_id))| {
        view! {
            <div class="reason">
                <h3>{move || app.t(title_en, title_id)}</h3>
                <p>{move || app.t(body_en, body_id)}</p>
            </div>
        }
    })
    .collect_view();

    let badges = certifications
        .into_iter()
        .map(|cert| view! { <span class="cert-badge">{cert}</span> })
        .collect_view();

    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    {move || app.t("Premium Indonesian", "Kelapa Indonesia")}
                    <span class="hero-accent">{move || app.t("Coconut Products", "Premium")}</span>
                </h1>
                <p class="hero-tagline">
                    {move || app.with_config(|config| config.tagline(app.lang()).to_string())}
                </p>
                <p class="hero-subtitle">
                    {move || app.t(
                        "Connecting global markets with Indonesia's finest coconut products, straight from Banyuwangi.",
                        "Menghubungkan pasar global dengan produk kelapa terbaik Indonesia, langsung dari Banyuwangi.",
                    )}
                </p>
                <div class="hero-actions">
                    <a href="/products" class="btn btn-primary">{move || app.t("View Products", "Lihat Produk")}</a>
                    <a href="/about" class="btn btn-outline">{move || app.t("Our Story", "Cerita Kami")}</a>
                </div>
                <div class="stats">{stats}</div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="section-title">{move || app.t("Featured Products", "Produk Unggulan")}</h2>
                <div class="product-grid">
                    {featured
                        .into_iter()
                        .map(|product| view! { <ProductCard product /> })
                        .collect_view()}
                </div>
                <a href="/products" class="btn btn-outline">
                    {move || app.t("View All Products", "Lihat Semua Produk")}
                </a>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title">
                    {move || app.t("Why Choose CocoWangi?", "Mengapa Memilih CocoWangi?")}
                </h2>
                <div class="reasons">{reasons}</div>
                <h3 class="section-subtitle">{move || app.t("Our Certifications", "Sertifikasi Kami")}</h3>
                <div class="cert-badges">{badges}</div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="section-title">
                    {move || app.t("What Our Customers Say", "Apa Kata Pelanggan Kami")}
                </h2>
                <div class="testimonial-grid">
                    {testimonials
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section cta">
            <div class="container">
                <h2>{move || app.t("Ready to Start Your Export Journey?", "Siap Memulai Perjalanan Ekspor Anda?")}</h2>
                <p>
                    {move || app.t(
                        "Contact us for custom quotes, product samples and consultation on your coconut product needs.",
                        "Hubungi kami untuk penawaran khusus, sampel produk, dan konsultasi kebutuhan produk kelapa Anda.",
                    )}
                </p>
                <div class="hero-actions">
                    <a href="/contact" class="btn btn-primary">{move || app.t("Get Quote Now", "Dapatkan Penawaran Sekarang")}</a>
                    <a href="/products" class="btn btn-outline">{move || app.t("Browse Products", "Jelajahi Produk")}</a>
                </div>
            </div>
        </section>
    }
}
