//! Static content: products, testimonials and export destinations.
//!
//! The JSON files are embedded and loaded wholesale; there is no partial or
//! streaming load. Loading validates the invariants the pages rely on.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::config::SiteConfig;
use crate::types::{Country, MAX_RATING, Product, Testimonial};

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const TESTIMONIALS_JSON: &str = include_str!("../data/testimonials.json");
const COUNTRIES_JSON: &str = include_str!("../data/countries.json");

/// Products shown on the home page.
pub const FEATURED_PRODUCTS: usize = 4;
/// Testimonials shown on the home page.
pub const FEATURED_TESTIMONIALS: usize = 3;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {collection}: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate {collection} id `{id}`")]
    DuplicateId { collection: &'static str, id: String },
    #[error("testimonial `{id}` has rating {rating}, expected 0..=5")]
    RatingOutOfRange { id: String, rating: u8 },
    #[error("product `{id}` has no origin")]
    MissingOrigin { id: String },
}

/// Everything the pages render, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub products: Arc<[Product]>,
    pub testimonials: Arc<[Testimonial]>,
    pub countries: Arc<[Country]>,
}

impl SiteContent {
    /// The content shipped with the site.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(PRODUCTS_JSON, TESTIMONIALS_JSON, COUNTRIES_JSON)
    }

    pub fn from_json(
        products: &str,
        testimonials: &str,
        countries: &str,
    ) -> Result<Self, ContentError> {
        let products: Vec<Product> = parse("products", products)?;
        let testimonials: Vec<Testimonial> = parse("testimonials", testimonials)?;
        let countries: Vec<Country> = parse("countries", countries)?;

        unique_ids("product", products.iter().map(|p| p.id.as_str()))?;
        unique_ids("testimonial", testimonials.iter().map(|t| t.id.as_str()))?;

        if let Some(p) = products
            .iter()
            .find(|p| p.specifications.origin.trim().is_empty())
        {
            return Err(ContentError::MissingOrigin { id: p.id.clone() });
        }
        if let Some(t) = testimonials.iter().find(|t| t.rating > MAX_RATING) {
            return Err(ContentError::RatingOutOfRange {
                id: t.id.clone(),
                rating: t.rating,
            });
        }

        tracing::debug!(
            products = products.len(),
            testimonials = testimonials.len(),
            countries = countries.len(),
            "content loaded"
        );
        Ok(Self {
            products: products.into(),
            testimonials: testimonials.into(),
            countries: countries.into(),
        })
    }

    /// Log products filed under categories the config does not know about.
    /// They stay in the catalog and remain reachable through search.
    pub fn check_categories(&self, config: &SiteConfig) -> usize {
        let mut unknown = 0;
        for product in self
            .products
            .iter()
            .filter(|p| !config.knows_category(&p.category))
        {
            tracing::warn!(id = %product.id, category = %product.category, "product has unconfigured category");
            unknown += 1;
        }
        unknown
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn featured_products(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    pub fn featured_testimonials(&self, count: usize) -> &[Testimonial] {
        &self.testimonials[..count.min(self.testimonials.len())]
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    collection: &'static str,
    json: &str,
) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { collection, source })
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
