//! Marketplace domain types and logic for Karigari Crafts.
//!
//! This crate provides the in-process core of the marketplace:
//!
//! - **Catalog**: craft listings, artisans, categories
//! - **Cart**: the session shopping cart and its store
//! - **Checkout**: shipping rules, payment state machine, orders
//! - **Search**: marketplace browsing with filters and pagination
//! - **Dashboard**: artisan-facing order and earnings views
//!
//! Persistence and authentication are external collaborators and never
//! appear here; everything in this crate is synchronous, in-memory state.
//!
//! # Example
//!
//! ```rust
//! use karigari_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let mut store = CartStore::new();
//!
//! // Add the first listing to the cart twice.
//! let product = &catalog.all()[0];
//! store.add_to_cart(ProductRef::from(product));
//! store.add_to_cart(ProductRef::from(product));
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.items.len(), 1);
//! assert_eq!(snapshot.item_count, 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod search;

pub use error::MarketError;
pub use ids::*;
pub use money::Rupees;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::MarketError;
    pub use crate::ids::*;
    pub use crate::money::Rupees;

    // Catalog
    pub use crate::catalog::{ArtisanProfile, ArtisanRef, Catalog, CraftCategory, Product};

    // Cart
    pub use crate::cart::{Cart, CartAction, CartItem, CartSnapshot, CartStore, ProductRef};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutState, Order, OrderStatus, PaymentMethod, PaymentReceipt,
        ShippingDetails, ShippingQuote, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD,
    };

    // Search
    pub use crate::search::{BrowseResults, CatalogQuery, Pagination, SortOption};

    // Dashboard
    pub use crate::dashboard::{EarningsSummary, OrderFilter};
}
