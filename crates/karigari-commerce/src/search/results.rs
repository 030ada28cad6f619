//! Browse results and pagination.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    ///
    /// `page` is clamped to >= 1 and `per_page` to >= 1, so degenerate
    /// inputs yield a valid first page instead of a negative offset or a
    /// division by zero.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 24, 0)
    }
}

/// One page of browse results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResults {
    /// Listings on this page, in sorted order.
    pub products: Vec<Product>,
    /// Pagination info for the full result set.
    pub pagination: Pagination,
}

impl BrowseResults {
    /// "Showing X of Y products" counts for the listing header.
    pub fn showing(&self) -> (usize, i64) {
        (self.products.len(), self.pagination.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_math() {
        let p = Pagination::new(2, 4, 6);
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.offset(), 4);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert!(p.is_last());
    }

    #[test]
    fn test_degenerate_inputs_are_clamped() {
        let p = Pagination::new(0, 0, 6);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.total_pages, 6);
        assert_eq!(p.offset(), 0);
        assert!(p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_empty_result_set_has_one_page() {
        let p = Pagination::new(1, 24, 0);
        assert_eq!(p.total_pages, 1);
        assert!(p.is_first());
        assert!(p.is_last());
    }
}
