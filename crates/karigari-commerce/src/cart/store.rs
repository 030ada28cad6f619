//! Cart store: reducer plus change notification.
//!
//! The store is an explicit object passed to consumers by reference, not
//! an ambient singleton. Mutations go through [`CartStore::dispatch`];
//! every mutation notifies subscribers with a fresh snapshot so dependent
//! views (cart drawer, checkout summary) re-render from derived state.

use crate::cart::{Cart, CartSnapshot, ProductRef};
use crate::ids::ProductId;

/// A cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a product; merges with an existing line for the same id.
    Add(ProductRef),
    /// Set a line's quantity; zero or below removes the line.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Remove a line.
    Remove(ProductId),
    /// Empty the cart.
    Clear,
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&CartSnapshot)>;

/// Owner of the session cart.
///
/// Single-threaded by design: every dispatch is a synchronous reducer
/// call, applied in the order the UI delivers them.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a previously persisted cart, e.g. one
    /// restored with [`Cart::from_json`].
    pub fn restore(cart: Cart) -> Self {
        Self {
            cart,
            ..Self::default()
        }
    }

    /// Apply a mutation and notify subscribers.
    pub fn dispatch(&mut self, action: CartAction) {
        tracing::debug!(?action, "cart dispatch");
        match action {
            CartAction::Add(product) => self.cart.add(product),
            CartAction::UpdateQuantity { id, quantity } => {
                self.cart.update_quantity(&id, quantity)
            }
            CartAction::Remove(id) => {
                self.cart.remove(&id);
            }
            CartAction::Clear => self.cart.clear(),
        }
        self.notify();
    }

    /// Add a product to the cart.
    pub fn add_to_cart(&mut self, product: ProductRef) {
        self.dispatch(CartAction::Add(product));
    }

    /// Set a line's quantity; zero or below removes the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    /// Remove a line from the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.dispatch(CartAction::Remove(id));
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Read-only access to the cart itself.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Register a subscriber called with a fresh snapshot after every
    /// mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&CartSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.cart.snapshot();
        for (_, listener) in &self.listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArtisanRef, CraftCategory};
    use crate::money::Rupees;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: &str, price: i64) -> ProductRef {
        ProductRef {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Rupees::new(price),
            image: "/placeholder.svg".to_string(),
            artisan: ArtisanRef::new("Meera Devi", "Jaipur, RJ"),
            category: CraftCategory::Jewelry,
        }
    }

    #[test]
    fn test_dispatch_updates_state() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 100));
        store.update_quantity(ProductId::new("a"), 3);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.item_count, 3);
        assert_eq!(snapshot.total, Rupees::new(300));
    }

    #[test]
    fn test_restore_resumes_persisted_cart() {
        let mut previous = Cart::new();
        previous.add(product("a", 100));
        let json = previous.to_json().unwrap();

        let mut store = CartStore::restore(Cart::from_json(&json).unwrap());
        store.add_to_cart(product("a", 100));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.total, Rupees::new(200));
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let seen: Rc<RefCell<Vec<u64>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut store = CartStore::new();
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.item_count));

        store.add_to_cart(product("a", 100));
        store.add_to_cart(product("a", 100));
        store.clear_cart();

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
        let sink = seen.clone();

        let mut store = CartStore::new();
        let sub = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add_to_cart(product("a", 100));
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.clear_cart();

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 100));
        let snapshot = store.snapshot();

        store.clear_cart();
        // The earlier snapshot is unaffected by later mutations.
        assert_eq!(snapshot.item_count, 1);
    }
}
