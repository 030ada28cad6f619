//! Product catalog module.
//!
//! Contains types for listings, artisans, categories, and the in-memory
//! catalog collection.

mod artisan;
mod category;
mod product;
mod store;

pub use artisan::{ArtisanProfile, ArtisanRef};
pub use category::CraftCategory;
pub use product::Product;
pub use store::Catalog;
