//! Shopping cart module.
//!
//! Contains the session cart, its derived snapshot view, and the store
//! that owns it.

mod cart;
mod store;

pub use cart::{Cart, CartItem, CartSnapshot, ProductRef};
pub use store::{CartAction, CartStore, SubscriptionId};
