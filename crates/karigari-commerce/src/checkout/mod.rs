//! Checkout module.
//!
//! Contains the checkout state machine, shipping rules, payment types,
//! and orders.

mod flow;
mod order;
mod payment;
mod shipping;

pub use flow::{CheckoutFlow, CheckoutState};
pub use order::{Order, OrderStatus};
pub use payment::{PaymentMethod, PaymentReceipt, ShippingDetails};
pub use shipping::{ShippingQuote, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD};
