//! Site configuration.
//!
//! Company details, navigation, product categories and the inquiry form's
//! option lists live in `site.toml`, embedded at build time.

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::ALL_CATEGORIES;
use crate::locale::{Language, select};

const EMBEDDED: &str = include_str!("../data/site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate category key `{0}`")]
    DuplicateCategory(String),
    #[error("category key `{0}` is reserved")]
    ReservedCategory(String),
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub company: CompanyInfo,
    pub social: SocialLinks,
    pub certifications: Vec<String>,
    pub navigation: Vec<NavItem>,
    pub categories: Vec<CategoryConfig>,
    pub inquiry: InquiryOptions,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub tagline_id: String,
    pub description: String,
    pub description_id: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub website: String,
    pub established: String,
    pub employees: String,
    pub countries: String,
    pub annual_capacity: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// `https://wa.me/<number>` deep link, without query string
    pub whatsapp: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub key: String,
    pub href: String,
    pub label_en: String,
    pub label_id: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// A product category the catalog can be filtered by.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub key: String,
    pub label_en: String,
    pub label_id: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// Option lists offered by the contact form.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct InquiryOptions {
    pub countries: Vec<CountryOption>,
    pub products: Vec<String>,
    pub quantities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryOption {
    pub value: String,
    pub flag: String,
}

/// Category button as offered to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChoice {
    pub key: String,
    pub label_en: String,
    pub label_id: String,
}

impl CategoryChoice {
    pub fn label(&self, lang: Language) -> &str {
        select(lang, &self.label_en, &self.label_id)
    }
}

impl NavItem {
    pub fn label(&self, lang: Language) -> &str {
        select(lang, &self.label_en, &self.label_id)
    }
}

fn enabled_by_default() -> bool {
    true
}

impl SiteConfig {
    /// The configuration shipped with the site.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for category in &self.categories {
            if category.key == ALL_CATEGORIES {
                return Err(ConfigError::ReservedCategory(category.key.clone()));
            }
            if !seen.insert(category.key.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.key.clone()));
            }
        }
        Ok(())
    }

    /// `all` followed by every enabled category, in file order.
    pub fn active_categories(&self) -> Vec<CategoryChoice> {
        let all = CategoryChoice {
            key: ALL_CATEGORIES.to_string(),
            label_en: "All Products".to_string(),
            label_id: "Semua Produk".to_string(),
        };
        std::iter::once(all)
            .chain(
                self.categories
                    .iter()
                    .filter(|c| c.enabled)
                    .map(|c| CategoryChoice {
                        key: c.key.clone(),
                        label_en: c.label_en.clone(),
                        label_id: c.label_id.clone(),
                    }),
            )
            .collect()
    }

    /// Whether `key` names a configured category, enabled or not.
    pub fn knows_category(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c.key == key)
    }

    pub fn category_label(&self, key: &str, lang: Language) -> Option<String> {
        self.active_categories()
            .into_iter()
            .find(|c| c.key == key)
            .map(|c| c.label(lang).to_string())
    }

    pub fn active_navigation(&self) -> impl Iterator<Item = &NavItem> {
        self.navigation.iter().filter(|item| item.enabled)
    }

    pub fn tagline(&self, lang: Language) -> &str {
        select(lang, &self.company.tagline, &self.company.tagline_id)
    }

    pub fn description(&self, lang: Language) -> &str {
        select(lang, &self.company.description, &self.company.description_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::embedded().expect("embedded config");
        assert_eq!(config.company.name, "CocoWangi");
        assert!(config.social.whatsapp.starts_with("https://wa.me/"));
        assert!(!config.inquiry.products.is_empty());
        assert!(config.knows_category("oil"));
    }

    #[test]
    fn active_categories_start_with_all_and_skip_disabled() {
        let config = SiteConfig::embedded().unwrap();
        let keys: Vec<String> = config
            .active_categories()
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, vec!["all".to_string(), "fiber".to_string()]);
    }

    #[test]
    fn category_label_is_localized() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(
            config.category_label("fiber", Language::Id).as_deref(),
            Some("Serat & Sabut")
        );
        assert_eq!(
            config.category_label("all", Language::En).as_deref(),
            Some("All Products")
        );
        assert_eq!(config.category_label("oil", Language::En), None);
    }

    #[test]
    fn navigation_hides_disabled_entries() {
        let config = SiteConfig::embedded().unwrap();
        let keys: Vec<&str> = config.active_navigation().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["home", "about", "products", "contact"]);
    }

    #[test]
    fn rejects_reserved_and_duplicate_keys() {
        let reserved = r#"
[[categories]]
key = "all"
label_en = "All"
label_id = "Semua"
"#;
        assert!(matches!(
            SiteConfig::from_toml_str(reserved),
            Err(ConfigError::ReservedCategory(_))
        ));

        let duplicate = r#"
[[categories]]
key = "oil"
label_en = "Oil"
label_id = "Minyak"

[[categories]]
key = "oil"
label_en = "Oil again"
label_id = "Minyak lagi"
"#;
        assert!(matches!(
            SiteConfig::from_toml_str(duplicate),
            Err(ConfigError::DuplicateCategory(key)) if key == "oil"
        ));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[company]
name = "Test Exporter"

[[categories]]
key = "charcoal"
label_en = "Charcoal"
label_id = "Arang"
"#,
        )
        .expect("partial config");
        assert_eq!(config.company.name, "Test Exporter");
        assert_eq!(config.active_categories().len(), 2);
        assert!(config.navigation.is_empty());
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_toml_str("categories = 7"),
            Err(ConfigError::Parse(_))
        ));
    }
}
