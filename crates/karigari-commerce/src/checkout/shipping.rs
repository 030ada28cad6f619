//! Shipping cost rules.

use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Orders strictly above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Rupees = Rupees(2000);

/// Flat rate charged below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: Rupees = Rupees(150);

/// Shipping cost quoted for a cart subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingQuote {
    /// Subtotal the quote was computed from.
    pub subtotal: Rupees,
    /// Shipping cost.
    pub cost: Rupees,
}

impl ShippingQuote {
    /// Quote shipping for a subtotal: free above the threshold, flat rate
    /// otherwise.
    pub fn for_subtotal(subtotal: Rupees) -> Self {
        let cost = if subtotal > FREE_SHIPPING_THRESHOLD {
            Rupees::zero()
        } else {
            FLAT_SHIPPING_RATE
        };
        Self { subtotal, cost }
    }

    /// Check if shipping is free for this quote.
    pub fn is_free(&self) -> bool {
        self.cost.is_zero()
    }

    /// Subtotal plus shipping.
    pub fn grand_total(&self) -> Rupees {
        self.subtotal + self.cost
    }
}
