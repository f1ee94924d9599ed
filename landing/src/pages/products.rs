// Products page - filterable catalog
use cocowangi::catalog::{CatalogFilter, CatalogView, CategorySelection};
use cocowangi::config::CategoryChoice;
use leptos::prelude::*;

use crate::sections::ProductCard;
use crate::state::{ToastKind, use_app};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let app = use_app();
    let catalog = RwSignal::new(CatalogFilter::new());

    // The catalog starts unloaded and fills in once mounted.
    Effect::new(move || {
        let products = app.with_content(|content| content.products.clone());
        catalog.update(|c| c.load(products));
    });

    let categories: Vec<CategoryChoice> = app.with_config(|config| config.active_categories());
    let category_buttons = categories
        .into_iter()
        .map(|choice| {
            let key = choice.key.clone();
            let current = choice.key.clone();
            view! {
                <button
                    class=move || {
                        if catalog.with(|c| c.category().key() == current) {
                            "category-button active"
                        } else {
                            "category-button"
                        }
                    }
                    on:click=move |_| catalog.update(|c| c.set_category(CategorySelection::from_key(&key)))
                >
                    {move || choice.label(app.lang()).to_string()}
                </button>
            }
        })
        .collect_view();

    let download_catalog = move |_| {
        app.notify(
            ToastKind::Success,
            app.t("Download Catalog", "Unduh Katalog"),
            app.t(
                "Catalog download will be available soon!",
                "Unduhan katalog akan segera tersedia!",
            ),
        )
    };

    let results = move || {
        catalog.with(|c| match c.view() {
            CatalogView::NotLoaded => view! {
                <p class="catalog-loading">{move || app.t("Loading products...", "Memuat produk...")}</p>
            }
            .into_any(),
            CatalogView::Empty => view! {
                <div class="catalog-empty">
                    <h3>{move || app.t("No products found", "Tidak ada produk ditemukan")}</h3>
                    <p>
                        {move || app.t(
                            "Try adjusting your search or filter criteria.",
                            "Coba sesuaikan kriteria pencarian atau filter Anda.",
                        )}
                    </p>
                    <button class="btn btn-primary" on:click=move |_| catalog.update(CatalogFilter::clear_filters)>
                        {move || app.t("Clear Filters", "Hapus Filter")}
                    </button>
                </div>
            }
            .into_any(),
            CatalogView::Matches(products) => {
                let cards = products
                    .into_iter()
                    .cloned()
                    .map(|product| view! { <ProductCard product /> })
                    .collect_view();
                view! { <div class="product-grid">{cards}</div> }.into_any()
            }
        })
    };

    view! {
        <section class="page-header">
            <div class="container">
                <h1>{move || app.t("Our Products", "Produk Kami")}</h1>
                <p>
                    {move || app.t(
                        "Premium coconut products processed and exported to international quality standards.",
                        "Produk kelapa premium yang diolah dan diekspor sesuai standar kualitas internasional.",
                    )}
                </p>
                <button class="btn btn-outline" on:click=download_catalog>
                    {move || app.t("Download Catalog", "Unduh Katalog")}
                </button>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="catalog-controls">
                    <input
                        type="search"
                        class="catalog-search"
                        placeholder=move || app.t("Search products...", "Cari produk...")
                        prop:value=move || catalog.with(|c| c.search().to_string())
                        on:input=move |ev| catalog.update(|c| c.set_search(event_target_value(&ev)))
                    />
                    <div class="category-buttons">{category_buttons}</div>
                </div>
                <p class="catalog-summary">
                    {move || {
                        let lang = app.lang();
                        app.with_config(|config| catalog.with(|c| c.summary(lang, config)))
                    }}
                </p>
                {results}
            </div>
        </section>

        <section class="section cta">
            <div class="container">
                <h2>{move || app.t("Need Custom Products?", "Butuh Produk Khusus?")}</h2>
                <p>
                    {move || app.t(
                        "We tailor specifications, packaging and volumes to your market.",
                        "Kami menyesuaikan spesifikasi, kemasan, dan volume untuk pasar Anda.",
                    )}
                </p>
                <a href="/contact" class="btn btn-primary">{move || app.t("Contact Us", "Hubungi Kami")}</a>
            </div>
        </section>
    }
}
