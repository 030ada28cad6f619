//! Product listing types.

use crate::catalog::{ArtisanRef, CraftCategory};
use crate::ids::ProductId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// A craft listing on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Craft category.
    pub category: CraftCategory,
    /// Unit price in whole rupees.
    pub price: Rupees,
    /// Display image reference (may be a placeholder).
    pub image: String,
    /// Seller snapshot at listing time.
    pub artisan: ArtisanRef,
    /// The craft's story as told by the artisan.
    pub story: String,
    /// Cultural authenticity score (0-100).
    pub authenticity_score: u8,
    /// Heritage tags for discovery.
    pub heritage_tags: Vec<String>,
    /// Average customer rating (0.0 - 5.0).
    pub rating: f64,
    /// Number of customer reviews.
    pub reviews: u32,
    /// Whether the browsing user has favorited this product.
    pub is_favorite: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new listing.
    pub fn new(
        name: impl Into<String>,
        category: CraftCategory,
        price: Rupees,
        artisan: ArtisanRef,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            name: name.into(),
            category,
            price,
            image: "/placeholder.svg".to_string(),
            artisan,
            story: String::new(),
            authenticity_score: 0,
            heritage_tags: Vec::new(),
            rating: 0.0,
            reviews: 0,
            is_favorite: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a heritage tag if not already present.
    pub fn add_heritage_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.heritage_tags.contains(&tag) {
            self.heritage_tags.push(tag);
            self.updated_at = current_timestamp();
        }
    }

    /// Toggle the favorite flag, returning the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Check whether the listing matches a free-text search term.
    ///
    /// Matches against name, artisan name, and story, case-insensitively,
    /// the same fields the marketplace search bar covers.
    pub fn matches_text(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.artisan.name.to_lowercase().contains(&term)
            || self.story.to_lowercase().contains(&term)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
