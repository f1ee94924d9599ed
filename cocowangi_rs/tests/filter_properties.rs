//! Property tests for catalog filtering and the preference toggles.

use cocowangi::catalog::{CatalogFilter, CategorySelection, filter_products};
use cocowangi::locale::{Language, LocaleManager, select};
use cocowangi::settings::{MemoryStore, SettingsStore};
use cocowangi::theme::{PresentationRoot, ThemeManager};
use cocowangi::types::{Product, Specifications};
use proptest::prelude::*;
use std::cell::Cell;

const CATEGORIES: [&str; 4] = ["fiber", "oil", "charcoal", "copra"];

fn arb_product() -> impl Strategy<Value = Product> {
    (
        0..CATEGORIES.len(),
        "[A-Za-zÀ-ÿ ]{0,16}",
        "[A-Za-zÀ-ÿ ]{0,16}",
        "[A-Za-z ]{0,24}",
        "[A-Za-z ]{0,24}",
    )
        .prop_map(|(cat, name, name_id, description, description_id)| Product {
            category: CATEGORIES[cat].to_string(),
            name,
            name_id,
            description,
            description_id,
            specifications: Specifications {
                origin: "Banyuwangi".into(),
                ..Default::default()
            },
            ..Default::default()
        })
}

fn arb_products() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..24).prop_map(|mut products| {
        for (idx, product) in products.iter_mut().enumerate() {
            product.id = idx.to_string();
        }
        products
    })
}

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

fn visible_ids(filter: &CatalogFilter) -> Vec<String> {
    filter.visible().map(|p| p.id.clone()).collect()
}

fn flip_case(term: &str) -> String {
    term.chars()
        .map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<String>()
            } else {
                c.to_uppercase().collect::<String>()
            }
        })
        .collect()
}

#[derive(Default)]
struct Root(Cell<bool>);

impl PresentationRoot for Root {
    fn set_dark(&self, enabled: bool) {
        self.0.set(enabled);
    }
}

proptest! {
    #[test]
    fn category_with_empty_search_is_the_category_subset(
        products in arb_products(),
        cat in 0..CATEGORIES.len(),
    ) {
        let key = CATEGORIES[cat];
        let hits = filter_products(&products, &CategorySelection::from_key(key), "");
        let expected: Vec<String> = products
            .iter()
            .filter(|p| p.category == key)
            .map(|p| p.id.clone())
            .collect();
        prop_assert_eq!(ids(&hits), expected);
    }

    #[test]
    fn search_ignores_case(
        products in arb_products(),
        term in "[A-Za-z]{1,3}",
    ) {
        let all = CategorySelection::All;
        let lower = filter_products(&products, &all, &term.to_lowercase());
        let upper = filter_products(&products, &all, &term.to_uppercase());
        let flipped = filter_products(&products, &all, &flip_case(&term));
        prop_assert_eq!(ids(&lower), ids(&upper));
        prop_assert_eq!(ids(&lower), ids(&flipped));
    }

    #[test]
    fn catalog_filter_category_is_the_category_subset(
        products in arb_products(),
        cat in 0..CATEGORIES.len(),
    ) {
        let key = CATEGORIES[cat];
        let expected: Vec<String> = products
            .iter()
            .filter(|p| p.category == key)
            .map(|p| p.id.clone())
            .collect();
        let mut filter = CatalogFilter::loaded(products);
        filter.set_category(CategorySelection::from_key(key));
        prop_assert_eq!(visible_ids(&filter), expected);
    }

    #[test]
    fn catalog_filter_search_ignores_case(
        products in arb_products(),
        cat in 0..=CATEGORIES.len(),
        term in "[A-Za-z]{1,3}",
    ) {
        let category = CATEGORIES
            .get(cat)
            .map(|key| CategorySelection::from_key(key))
            .unwrap_or_default();
        let expected = ids(&filter_products(&products, &category, &term));
        let mut filter = CatalogFilter::loaded(products);
        filter.set_category(category);

        filter.set_search(term.to_lowercase());
        let lower = visible_ids(&filter);
        filter.set_search(term.to_uppercase());
        let upper = visible_ids(&filter);
        filter.set_search(flip_case(&term));
        let flipped = visible_ids(&filter);

        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(&lower, &flipped);
        prop_assert_eq!(lower, expected);
    }

    #[test]
    fn reapplying_the_same_filter_changes_nothing(
        products in arb_products(),
        cat in 0..=CATEGORIES.len(),
        term in "[a-z]{0,2}",
    ) {
        let category = CATEGORIES
            .get(cat)
            .map(|key| CategorySelection::from_key(key))
            .unwrap_or_default();
        let mut filter = CatalogFilter::loaded(products);
        filter.set_category(category.clone());
        filter.set_search(term.clone());
        let once: Vec<String> = filter.visible().map(|p| p.id.clone()).collect();

        filter.set_category(category);
        filter.set_search(term);
        let twice: Vec<String> = filter.visible().map(|p| p.id.clone()).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtered_output_keeps_source_order(
        products in arb_products(),
        term in "[a-z]{0,1}",
    ) {
        let hits = filter_products(&products, &CategorySelection::All, &term);
        let positions: Vec<usize> = hits
            .iter()
            .map(|p| p.id.parse::<usize>().unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn double_locale_toggle_is_identity(start_secondary in any::<bool>(), a in ".{0,8}", b in ".{0,8}") {
        let store = MemoryStore::new();
        if start_secondary {
            store.set("language", "id").unwrap();
        }
        let mut locale = LocaleManager::new(&store);
        let before = locale.language();
        let picked = locale.select(&a, &b).to_string();

        locale.toggle();
        locale.toggle();

        prop_assert_eq!(locale.language(), before);
        prop_assert_eq!(locale.select(&a, &b), picked.as_str());
        prop_assert_eq!(select(before, &a, &b), picked.as_str());
    }

    #[test]
    fn theme_root_tracks_every_toggle(start_dark in any::<bool>(), toggles in 0usize..6) {
        let store = MemoryStore::new();
        let root = Root::default();
        let mut theme = ThemeManager::new(&store, &root, start_dark);
        prop_assert_eq!(root.0.get(), theme.is_dark());

        for _ in 0..toggles {
            theme.toggle();
            prop_assert_eq!(root.0.get(), theme.is_dark());
        }
        prop_assert_eq!(theme.is_dark(), start_dark ^ (toggles % 2 == 1));
    }
}

#[test]
fn language_codes_round_trip() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
}
