//! Marketplace browse query.

use crate::catalog::{Catalog, CraftCategory, Product};
use crate::search::{BrowseResults, Pagination};
use serde::{Deserialize, Serialize};

/// Sort options offered on the marketplace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Curated catalog order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Newest listings first.
    Newest,
    /// Most reviewed first.
    MostPopular,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::MostPopular => "Most Popular",
        }
    }
}

/// A browse query over the catalog.
///
/// Filters mirror the marketplace page: free text over name/artisan/story,
/// a category select, and an artisan-region select.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search term.
    pub text: Option<String>,
    /// Restrict to one category.
    pub category: Option<CraftCategory>,
    /// Restrict to artisans from a region (e.g., "Uttar Pradesh").
    pub region: Option<String>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogQuery {
    /// Create a query with default paging.
    pub fn new() -> Self {
        Self {
            text: None,
            category: None,
            region: None,
            sort: SortOption::Featured,
            page: 1,
            per_page: 24,
        }
    }

    /// Set the text search term.
    pub fn with_text(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        if !term.is_empty() {
            self.text = Some(term);
        }
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: CraftCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to an artisan region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Check whether a listing passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = &self.text {
            if !product.matches_text(term) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if let Some(region) = &self.region {
            // Substring-match the region's leading word against the artisan
            // location string, which carries a city and state abbreviation
            // ("Jaipur, RJ"). Callers supply a key that appears in those
            // strings, e.g. "RJ".
            let key = region.split_whitespace().next().unwrap_or(region);
            if !product.artisan.location.contains(key) {
                return false;
            }
        }
        true
    }

    /// Run the query against a catalog.
    pub fn run(&self, catalog: &Catalog) -> BrowseResults {
        let mut matched: Vec<Product> = catalog
            .all()
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            SortOption::Featured => {}
            SortOption::PriceAsc => matched.sort_by_key(|p| p.price),
            SortOption::PriceDesc => {
                matched.sort_by_key(|p| std::cmp::Reverse(p.price))
            }
            SortOption::Newest => {
                matched.sort_by_key(|p| std::cmp::Reverse(p.created_at))
            }
            SortOption::MostPopular => {
                matched.sort_by_key(|p| std::cmp::Reverse(p.reviews))
            }
        }

        let total = matched.len() as i64;
        let pagination = Pagination::new(self.page, self.per_page, total);
        let start = pagination.offset().min(total) as usize;
        let end = (pagination.offset() + pagination.per_page).min(total) as usize;
        let products = matched[start..end].to_vec();

        BrowseResults {
            products,
            pagination,
        }
    }
}
