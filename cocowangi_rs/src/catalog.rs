//! Product catalog filtering.
//!
//! The visible list is always recomputed from the full product list: first
//! by category (exact key match), then by a case-insensitive search over the
//! bilingual names and descriptions. Order follows the source list.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::locale::{Language, select};
use crate::types::Product;

/// Sentinel category key meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// The category part of a filter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    /// `"all"` selects everything; any other key restricts to that category.
    pub fn from_key(key: &str) -> Self {
        if key == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(key) => key,
        }
    }

    pub fn admits(&self, product: &Product) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(key) => product.category == *key,
        }
    }
}

/// Products matching `category` and `search`, in source order.
///
/// An empty `search` keeps every category match.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: &CategorySelection,
    search: &str,
) -> Vec<&'a Product> {
    matching_indices(products, category, search)
        .into_iter()
        .map(|idx| &products[idx])
        .collect()
}

/// Positions in `products` admitted by `category` and `search`, ascending.
fn matching_indices(products: &[Product], category: &CategorySelection, search: &str) -> Vec<usize> {
    let term = search.to_lowercase();
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| category.admits(product))
        .filter(|(_, product)| term.is_empty() || product.matches_term(&term))
        .map(|(idx, _)| idx)
        .collect()
}

/// What the catalog grid should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView<'a> {
    /// No product list has been loaded yet.
    NotLoaded,
    /// Loaded, but nothing matches the current filter.
    Empty,
    Matches(Vec<&'a Product>),
}

impl CatalogView<'_> {
    pub fn len(&self) -> usize {
        match self {
            CatalogView::Matches(products) => products.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filter parameters plus the indices of the currently visible products.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    products: Option<Arc<[Product]>>,
    category: CategorySelection,
    search: String,
    visible: Vec<usize>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter over `products` showing everything.
    pub fn loaded(products: impl Into<Arc<[Product]>>) -> Self {
        let mut filter = Self::new();
        filter.load(products);
        filter
    }

    pub fn load(&mut self, products: impl Into<Arc<[Product]>>) {
        self.products = Some(products.into());
        self.recompute();
    }

    pub fn is_loaded(&self) -> bool {
        self.products.is_some()
    }

    pub fn category(&self) -> &CategorySelection {
        &self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_category(&mut self, category: CategorySelection) {
        if self.category != category {
            self.category = category;
            self.recompute();
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search != search {
            self.search = search;
            self.recompute();
        }
    }

    /// Back to every product: category `all`, empty search.
    pub fn clear_filters(&mut self) {
        self.category = CategorySelection::All;
        self.search.clear();
        self.recompute();
    }

    /// Whether any filter is narrowing the list.
    pub fn is_filtered(&self) -> bool {
        self.category != CategorySelection::All || !self.search.is_empty()
    }

    pub fn total(&self) -> usize {
        self.products.as_ref().map_or(0, |p| p.len())
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Visible products, in source order.
    pub fn visible(&self) -> impl Iterator<Item = &Product> {
        let products = self.products.as_deref().unwrap_or(&[]);
        self.visible.iter().map(move |&idx| &products[idx])
    }

    pub fn view(&self) -> CatalogView<'_> {
        match self.products {
            None => CatalogView::NotLoaded,
            Some(_) if self.visible.is_empty() => CatalogView::Empty,
            Some(_) => CatalogView::Matches(self.visible().collect()),
        }
    }

    /// "Showing 3 of 8 products in category: Fiber & Husk".
    pub fn summary(&self, lang: Language, config: &SiteConfig) -> String {
        let mut line = format!(
            "{} {} {} {} {}",
            select(lang, "Showing", "Menampilkan"),
            self.visible_count(),
            select(lang, "of", "dari"),
            self.total(),
            select(lang, "products", "produk"),
        );
        if let CategorySelection::Only(key) = &self.category {
            let label = config
                .category_label(key, lang)
                .unwrap_or_else(|| key.clone());
            line.push_str(&format!(
                " {} {}",
                select(lang, "in category:", "dalam kategori:"),
                label
            ));
        }
        line
    }

    fn recompute(&mut self) {
        let Some(products) = &self.products else {
            self.visible.clear();
            return;
        };
        self.visible = matching_indices(products, &self.category, &self.search);
        tracing::debug!(
            category = self.category.key(),
            search = %self.search,
            visible = self.visible.len(),
            total = products.len(),
            "catalog filter recomputed"
        );
    }
}
