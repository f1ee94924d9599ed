//! Static content records.
//!
//! These mirror the JSON files shipped with the site (camelCase keys). They
//! are loaded once and never mutated, so everything here hands out shared
//! references or copies.
//!
//! # Example
//!
//! ```rust
//! use cocowangi::types::{Product, Specifications};
//! use cocowangi::locale::Language;
//!
//! let product = Product {
//!     id: "coir-fiber".into(),
//!     name: "Coconut Coir Fiber".into(),
//!     name_id: "Serat Sabut Kelapa".into(),
//!     category: "fiber".into(),
//!     specifications: Specifications {
//!         origin: "Banyuwangi, East Java".into(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! assert_eq!(product.name(Language::Id), "Serat Sabut Kelapa");
//! assert_eq!(product.category_badge(), "FIBER");
//! ```

use serde::{Deserialize, Serialize};

use crate::locale::{Language, select};

/// Highest rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

/// A product in the export catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// English name
    pub name: String,
    /// Indonesian name
    pub name_id: String,
    /// Category key, one of the configured categories
    pub category: String,
    /// English description
    #[serde(default)]
    pub description: String,
    /// Indonesian description
    #[serde(default)]
    pub description_id: String,
    #[serde(default)]
    pub image: String,
    pub specifications: Specifications,
    #[serde(default)]
    pub applications: Vec<String>,
    #[serde(default)]
    pub certifications_held: Vec<String>,
    #[serde(default)]
    pub min_order_quantity: String,
    #[serde(default)]
    pub export_price: String,
}

/// Technical sheet of a product. Only the origin is mandatory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    pub origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
}

impl Product {
    pub fn name(&self, lang: Language) -> &str {
        select(lang, &self.name, &self.name_id)
    }

    pub fn description(&self, lang: Language) -> &str {
        select(lang, &self.description, &self.description_id)
    }

    /// Whether any of the four bilingual text fields contains `lowered_term`.
    ///
    /// The term must already be lowercased; haystacks are lowercased here with
    /// full Unicode case mapping.
    pub fn matches_term(&self, lowered_term: &str) -> bool {
        [
            &self.name,
            &self.name_id,
            &self.description,
            &self.description_id,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(lowered_term))
    }

    /// First `limit` applications plus how many were left out.
    pub fn application_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = limit.min(self.applications.len());
        (&self.applications[..shown], self.applications.len() - shown)
    }

    pub fn has_certifications(&self) -> bool {
        !self.certifications_held.is_empty()
    }

    pub fn category_badge(&self) -> String {
        self.category.to_uppercase()
    }
}

/// A customer review.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    /// Author name
    pub name: String,
    pub company: String,
    pub country: String,
    pub flag: String,
    /// 0..=5, checked at load time
    pub rating: u8,
    pub review: String,
    pub review_id: String,
    pub product_category: String,
    #[serde(default)]
    pub order_volume: String,
}

impl Testimonial {
    pub fn review(&self, lang: Language) -> &str {
        select(lang, &self.review, &self.review_id)
    }

    /// Filled/empty state of the five rating stars.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        std::array::from_fn(|idx| idx < self.rating as usize)
    }

    /// Avatar letter.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// An export destination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub code: String,
    pub flag: String,
    pub export_volume: String,
    #[serde(default)]
    pub main_products: Vec<String>,
}

impl Country {
    /// Products shown on the country tile (the card has room for two).
    pub fn headline_products(&self, limit: usize) -> &[String] {
        &self.main_products[..limit.min(self.main_products.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "vco".into(),
            name: "Virgin Coconut Oil".into(),
            name_id: "Minyak Kelapa Murni".into(),
            category: "oil".into(),
            description: "Cold-pressed oil".into(),
            description_id: "Minyak perasan dingin".into(),
            applications: vec!["Food".into(), "Cosmetics".into(), "Pharma".into()],
            ..Default::default()
        }
    }

    #[test]
    fn deserializes_camel_case_product() {
        let json = r#"{
            "id": "p1",
            "name": "Cocopeat",
            "nameId": "Cocopeat",
            "category": "fiber",
            "description": "Growing medium",
            "descriptionId": "Media tanam",
            "image": "/images/cocopeat.jpg",
            "specifications": { "origin": "Banyuwangi", "moisture": "< 20%" },
            "applications": ["Horticulture"],
            "certificationsHeld": ["COA"],
            "minOrderQuantity": "1 x 40ft HC",
            "exportPrice": "USD 150-200/ton"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.name_id, "Cocopeat");
        assert_eq!(p.specifications.moisture.as_deref(), Some("< 20%"));
        assert_eq!(p.specifications.purity, None);
        assert!(p.has_certifications());
    }

    #[test]
    fn missing_origin_is_rejected() {
        let json = r#"{"id":"x","name":"a","nameId":"b","category":"oil","specifications":{}}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn matches_term_checks_all_four_fields() {
        let p = product();
        assert!(p.matches_term("virgin"));
        assert!(p.matches_term("murni"));
        assert!(p.matches_term("cold-pressed"));
        assert!(p.matches_term("perasan"));
        assert!(!p.matches_term("charcoal"));
    }

    #[test]
    fn application_preview_counts_hidden() {
        let p = product();
        let (shown, hidden) = p.application_preview(2);
        assert_eq!(shown, &["Food".to_string(), "Cosmetics".to_string()]);
        assert_eq!(hidden, 1);

        let (shown, hidden) = p.application_preview(10);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn stars_follow_rating() {
        let t = Testimonial {
            rating: 3,
            ..Default::default()
        };
        assert_eq!(t.stars(), [true, true, true, false, false]);
        assert_eq!(Testimonial::default().stars(), [false; 5]);
    }
}
