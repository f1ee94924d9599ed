use cocowangi::links;
use cocowangi::types::Product;
use leptos::prelude::*;

use crate::state::use_app;

const APPLICATIONS_SHOWN: usize = 2;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let app = use_app();
    let (details_open, set_details_open) = signal(false);

    let quote_href = links::quote_request(&product.name);
    let badge = product.category_badge();
    let image = product.image.clone();
    let origin = product.specifications.origin.clone();
    let price = product.export_price.clone();
    let min_order = product.min_order_quantity.clone();
    let certified = product.has_certifications();

    let (shown, hidden) = product.application_preview(APPLICATIONS_SHOWN);
    let applications = shown
        .iter()
        .cloned()
        .map(|application| view! { <span class="product-application">{application}</span> })
        .collect_view();

    let product = StoredValue::new(product);
    let name = move || product.with_value(|p| p.name(app.lang()).to_string());
    let spec = move |label: (&'static str, &'static str), value: Option<String>| {
        value.map(|value| {
            view! {
                <div class="product-spec">
                    <span class="product-spec-label">{move || app.t(label.0, label.1)}</span>
                    <span class="product-spec-value">{value}</span>
                </div>
            }
        })
    };
    let (purity, moisture, packaging) = product.with_value(|p| {
        (
            p.specifications.purity.clone(),
            p.specifications.moisture.clone(),
            p.specifications.packaging.clone(),
        )
    });

    view! {
        <article class="product-card">
            <div class="product-media">
                <img src=image alt=name />
                <span class="product-badge">{badge}</span>
                {certified.then(|| view! { <span class="product-certified">"✓"</span> })}
            </div>
            <div class="product-body">
                <h3 class="product-name">{name}</h3>
                <p class="product-description">
                    {move || product.with_value(|p| p.description(app.lang()).to_string())}
                </p>

                <div class="product-specs">
                    <div class="product-spec">
                        <span class="product-spec-label">{move || app.t("Origin:", "Asal:")}</span>
                        <span class="product-spec-value">{origin}</span>
                    </div>
                    {spec(("Purity:", "Kemurnian:"), purity)}
                    {spec(("Moisture:", "Kelembaban:"), moisture)}
                </div>

                <div class="product-price">
                    <p class="product-price-value">{price}</p>
                    <p class="product-moq">{move || app.t("Min. Order:", "Min. Pesan:")} " " {min_order}</p>
                </div>

                <div class="product-applications">
                    <p class="product-applications-label">
                        {move || app.t("Applications:", "Aplikasi:")}
                    </p>
                    {applications}
                    {(hidden > 0).then(|| view! {
                        <span class="product-application more">
                            "+" {hidden} " " {move || app.t("more", "lagi")}
                        </span>
                    })}
                </div>

                <Show when=move || details_open.get()>
                    <div class="product-details">
                        {spec(("Packaging:", "Kemasan:"), packaging.clone())}
                        <p class="product-details-label">{move || app.t("Applications:", "Aplikasi:")}</p>
                        <ul>
                            {product.with_value(|p| {
                                p.applications
                                    .iter()
                                    .cloned()
                                    .map(|application| view! { <li>{application}</li> })
                                    .collect_view()
                            })}
                        </ul>
                        <div class="cert-badges">
                            {product.with_value(|p| {
                                p.certifications_held
                                    .iter()
                                    .cloned()
                                    .map(|cert| view! { <span class="cert-badge">{cert}</span> })
                                    .collect_view()
                            })}
                        </div>
                    </div>
                </Show>

                <div class="product-actions">
                    <button
                        class="btn btn-outline"
                        on:click=move |_| set_details_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if details_open.get() {
                                app.t("Hide Details", "Tutup Detail")
                            } else {
                                app.t("Details", "Detail")
                            }
                        }}
                    </button>
                    <a href=quote_href class="btn btn-primary">
                        {move || app.t("Quote", "Penawaran")}
                    </a>
                </div>
            </div>
        </article>
    }
}
