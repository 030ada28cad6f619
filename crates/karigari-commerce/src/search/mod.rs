//! Marketplace browse module.
//!
//! Contains the catalog query, sort options, and paginated results.

mod query;
mod results;

pub use query::{CatalogQuery, SortOption};
pub use results::{BrowseResults, Pagination};
