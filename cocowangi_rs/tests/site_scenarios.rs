use std::cell::Cell;

use cocowangi::catalog::{CatalogFilter, CatalogView, CategorySelection};
use cocowangi::content::{FEATURED_PRODUCTS, SiteContent};
use cocowangi::inquiry::{
    ContactFormData, FormField, FormState, HandOffError, InquiryForm, InquirySink, SubmitOutcome,
    SubmitRefused,
};
use cocowangi::links;
use cocowangi::locale::{Language, LocaleManager};
use cocowangi::settings::{MemoryStore, SettingsError, SettingsStore};
use cocowangi::types::{Product, Specifications};
use cocowangi::SiteConfig;
use futures::executor::block_on;
use pretty_assertions::assert_eq;

fn product(id: &str, category: &str, name: &str) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        name_id: name.into(),
        category: category.into(),
        specifications: Specifications {
            origin: "Banyuwangi".into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

struct CountingSink {
    calls: Cell<usize>,
}

impl InquirySink for CountingSink {
    async fn deliver(&self, _inquiry: &ContactFormData) -> Result<(), HandOffError> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

struct Broken;

impl SettingsStore for Broken {
    fn get(&self, _key: &str) -> Result<Option<String>, SettingsError> {
        Err(SettingsError::Unavailable)
    }
    fn set(&self, key: &str, _value: &str) -> Result<(), SettingsError> {
        Err(SettingsError::Rejected {
            key: key.to_string(),
            reason: "quota exceeded".into(),
        })
    }
    fn remove(&self, _key: &str) -> Result<(), SettingsError> {
        Err(SettingsError::Unavailable)
    }
}

#[test]
fn fiber_then_oil_search_is_empty_not_an_error() {
    let mut catalog = CatalogFilter::loaded(vec![
        product("1", "oil", "Virgin Coconut Oil"),
        product("2", "fiber", "Coconut Coir Fiber"),
    ]);

    catalog.set_category(CategorySelection::from_key("fiber"));
    let CatalogView::Matches(hits) = catalog.view() else {
        panic!("expected matches");
    };
    assert_eq!(hits.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["2"]);

    catalog.set_search("oil");
    assert_eq!(catalog.view(), CatalogView::Empty);
    assert_eq!(catalog.visible_count(), 0);
    assert_eq!(catalog.total(), 2);
}

#[test]
fn home_beranda_round_trip() {
    let mut locale = LocaleManager::new(MemoryStore::new());
    locale.toggle();
    assert_eq!(locale.select("Home", "Beranda"), "Beranda");
    locale.toggle();
    assert_eq!(locale.select("Home", "Beranda"), "Home");
}

#[test]
fn broken_store_degrades_to_session_defaults() {
    let mut locale = LocaleManager::new(Broken);
    assert_eq!(locale.language(), Language::En);
    assert_eq!(locale.toggle(), Language::Id);
    assert_eq!(locale.language(), Language::Id);
}

#[test]
fn quote_request_seeds_the_contact_form() {
    let content = SiteContent::embedded().unwrap();
    let featured = content.featured_products(FEATURED_PRODUCTS);
    let link = links::quote_request(&featured[0].name);
    let query = link.split_once('?').map(|(_, q)| q).unwrap_or_default();

    let form = InquiryForm::seeded(links::product_from_query(query));
    assert_eq!(form.value(FormField::ProductInterest), featured[0].name);
}

#[test]
fn full_inquiry_cycle_ends_empty() {
    let mut form = InquiryForm::seeded(Some("Cocopeat".into()));
    for (field, value) in [
        (FormField::Name, "Priya Raghavan"),
        (FormField::Email, "priya@southerncoir.example"),
        (FormField::Company, "Southern Coir Works"),
        (FormField::Country, "India"),
        (FormField::Quantity, "50-100 tons"),
    ] {
        assert!(form.update(field, value));
    }

    let sink = CountingSink { calls: Cell::new(0) };
    let outcome = block_on(form.submit(&sink)).unwrap();
    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(form.state(), FormState::Submitted);
    assert_eq!(form.data(), &ContactFormData::default());
    assert_eq!(sink.calls.get(), 1);
}

#[test]
fn rapid_double_click_hands_off_once() {
    let mut form = InquiryForm::seeded(Some("Dried Copra".into()));
    form.update(FormField::Name, "A");
    form.update(FormField::Email, "a@b.example");
    form.update(FormField::Company, "C");
    form.update(FormField::Country, "Other");

    let sink = CountingSink { calls: Cell::new(0) };
    let first = form.begin_submit().expect("first click starts the hand-off");
    assert_eq!(form.begin_submit(), Err(SubmitRefused::InFlight));
    assert_eq!(form.begin_submit(), Err(SubmitRefused::InFlight));

    let result = block_on(sink.deliver(&first));
    assert_eq!(form.finish_submit(result), Some(SubmitOutcome::Delivered));
    assert_eq!(sink.calls.get(), 1);
}

#[test]
fn every_enabled_category_has_products() {
    let config = SiteConfig::embedded().unwrap();
    let content = SiteContent::embedded().unwrap();
    let mut catalog = CatalogFilter::loaded(content.products.clone());
    for choice in config.active_categories() {
        catalog.set_category(CategorySelection::from_key(&choice.key));
        assert!(
            catalog.visible_count() > 0,
            "category {} has no products",
            choice.key
        );
    }
}
