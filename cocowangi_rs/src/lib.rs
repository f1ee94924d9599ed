//! # cocowangi
//!
//! The behaviour behind the CocoWangi export site: everything that is not
//! markup. The browser app in `landing/` renders pages; this crate decides
//! what they show.
//!
//! ## Features
//!
//! - **Catalog Filter** - Category and free-text search over the product list
//! - **Bilingual Copy** - English / Indonesian selection with a persisted choice
//! - **Theme** - Persisted dark mode mirrored onto the document root
//! - **Inquiry Form** - Required-field checks, single-flight submit, reset or retain
//! - **Hand-off Links** - WhatsApp, mail, phone and map links
//!
//! ## Quick Start
//!
//! ```rust
//! use cocowangi::catalog::{CatalogFilter, CatalogView, CategorySelection};
//! use cocowangi::content::SiteContent;
//!
//! let content = SiteContent::embedded().unwrap();
//! let mut catalog = CatalogFilter::loaded(content.products.clone());
//!
//! catalog.set_category(CategorySelection::from_key("fiber"));
//! catalog.set_search("cocopeat");
//! assert!(matches!(catalog.view(), CatalogView::Matches(ref hits) if hits.len() == 1));
//! ```
//!
//! ## Language and theme
//!
//! ```rust
//! use cocowangi::locale::LocaleManager;
//! use cocowangi::settings::MemoryStore;
//!
//! let mut locale = LocaleManager::new(MemoryStore::new());
//! assert_eq!(locale.select("Home", "Beranda"), "Home");
//! locale.toggle();
//! assert_eq!(locale.select("Home", "Beranda"), "Beranda");
//! ```
//!
//! ---
//!
//! Built in Banyuwangi by the CocoWangi team (c)2025

#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod config;
pub mod content;
pub mod inquiry;
pub mod links;
pub mod locale;
pub mod settings;
pub mod theme;
pub mod types;

pub use catalog::{CatalogFilter, CatalogView, CategorySelection};
pub use config::SiteConfig;
pub use content::SiteContent;
pub use inquiry::{ContactFormData, FormField, FormState, InquiryForm, InquirySink};
pub use locale::{Language, LocaleManager};
pub use settings::{MemoryStore, SettingsStore};
pub use theme::{PresentationRoot, ThemeManager};
