//! Cart and line item types.
//!
//! The cart is the authoritative in-memory state for the active browsing
//! session. Items are unique by product id; `total` and `item_count` are
//! derived from the items on every read and never stored independently.

use crate::catalog::{ArtisanRef, CraftCategory, Product};
use crate::error::MarketError;
use crate::ids::ProductId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// A product reference handed to the cart by the marketplace.
///
/// Carries no quantity: adding the same product again increments the
/// existing line instead of appending a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRef {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in whole rupees.
    pub price: Rupees,
    /// Display image reference.
    pub image: String,
    /// Seller snapshot at time of adding.
    pub artisan: ArtisanRef,
    /// Craft category.
    pub category: CraftCategory,
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            artisan: product.artisan.clone(),
            category: product.category,
        }
    }
}

/// One product line entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identifier; item identity within the cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in whole rupees.
    pub price: Rupees,
    /// Display image reference.
    pub image: String,
    /// Seller snapshot at time of adding, not a live reference.
    pub artisan: ArtisanRef,
    /// Craft category.
    pub category: CraftCategory,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    fn from_ref(product: ProductRef) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            artisan: product.artisan,
            category: product.category,
            quantity: 1,
        }
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Rupees {
        self.price.saturating_mul(self.quantity as i64)
    }
}

/// The session shopping cart.
///
/// All four mutations are total functions: they cannot fail, block, or
/// suspend. Consumers read state through [`Cart::snapshot`] and mutate it
/// only through these operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If an item with the same product id already exists, its quantity is
    /// incremented by 1; otherwise a new line is appended with quantity 1.
    pub fn add(&mut self, product: ProductRef) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem::from_ref(product));
    }

    /// Set the quantity of a line item.
    ///
    /// A quantity of zero or below removes the item entirely. Unknown ids
    /// are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity.min(u32::MAX as i64) as u32;
        }
    }

    /// Remove a line item. Returns whether it existed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The line items, in the order they were added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Derived sum of `price * quantity` over all items.
    pub fn total(&self) -> Rupees {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Derived sum of quantities over all items.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Serialize the cart for persistence across sessions.
    pub fn to_json(&self) -> Result<String, MarketError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a cart persisted with [`Cart::to_json`].
    pub fn from_json(json: &str) -> Result<Self, MarketError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Capture the state exposed to consumers.
    ///
    /// `total` and `item_count` are recomputed from the items at capture
    /// time, so a snapshot can never disagree with its own item list.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }
}

/// Read-only view of the cart handed to consumers (drawer, checkout
/// summary).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Line items at capture time.
    pub items: Vec<CartItem>,
    /// Sum of `price * quantity` over all items.
    pub total: Rupees,
    /// Sum of quantities over all items.
    pub item_count: u64,
}

impl CartSnapshot {
    /// Check if the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> ProductRef {
        ProductRef {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Rupees::new(price),
            image: "/placeholder.svg".to_string(),
            artisan: ArtisanRef::new("Priya Sharma", "Varanasi, UP"),
            category: CraftCategory::Textiles,
        }
    }

    #[test]
    fn test_add_distinct_products() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        cart.add(product("b", 50));

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Rupees::new(150));
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        cart.add(product("a", 100));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 2);
        assert_eq!(cart.total(), Rupees::new(200));
    }

    #[test]
    fn test_update_quantity_floor_removes() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));

        cart.update_quantity(&ProductId::new("a"), 0);
        assert!(cart.is_empty());

        cart.add(product("a", 100));
        cart.update_quantity(&ProductId::new("a"), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        cart.add(product("a", 100));

        cart.update_quantity(&ProductId::new("a"), 1);
        assert_eq!(cart.total(), Rupees::new(100));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        let before = cart.snapshot();

        cart.update_quantity(&ProductId::new("ghost"), 5);
        assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        let before = cart.snapshot();

        assert!(!cart.remove(&ProductId::new("ghost")));
        assert_eq!(cart.snapshot(), before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        cart.add(product("b", 50));
        cart.clear();

        let snapshot = cart.snapshot();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, Rupees::zero());
        assert_eq!(snapshot.item_count, 0);
    }

    #[test]
    fn test_persisted_cart_round_trips() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        cart.add(product("a", 100));
        cart.add(product("b", 50));

        let json = cart.to_json().unwrap();
        let restored = Cart::from_json(&json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.total(), Rupees::new(250));
    }

    #[test]
    fn test_malformed_persisted_cart_is_rejected() {
        let err = Cart::from_json("{not json").unwrap_err();
        assert!(matches!(err, MarketError::Serialization(_)));
    }

    #[test]
    fn test_snapshot_totals_match_items() {
        let mut cart = Cart::new();
        cart.add(product("a", 100));
        cart.add(product("a", 100));
        cart.add(product("b", 50));

        let snapshot = cart.snapshot();
        let recomputed: Rupees = snapshot.items.iter().map(|i| i.line_total()).sum();
        assert_eq!(snapshot.total, recomputed);
        assert_eq!(
            snapshot.item_count,
            snapshot.items.iter().map(|i| i.quantity as u64).sum::<u64>()
        );
    }
}
