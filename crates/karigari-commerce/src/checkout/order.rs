//! Order types.

use crate::cart::CartItem;
use crate::checkout::PaymentReceipt;
use crate::ids::OrderId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting the artisan.
    #[default]
    Pending,
    /// Being prepared by the artisan.
    Processing,
    /// Handed to the courier.
    Shipped,
    /// Delivered to the customer.
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Check if the order has reached its final state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer name from the shipping details.
    pub customer: String,
    /// Customer email.
    pub email: String,
    /// Line items frozen at purchase time.
    pub items: Vec<CartItem>,
    /// Subtotal before shipping.
    pub subtotal: Rupees,
    /// Shipping charged.
    pub shipping_total: Rupees,
    /// Total charged.
    pub grand_total: Rupees,
    /// Payment proof.
    pub payment: PaymentReceipt,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Unix timestamp when placed.
    pub placed_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("ORD-{}", ts)
    }

    /// Total item count.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Update fulfillment status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }

    /// Check whether any line item belongs to the given artisan.
    pub fn involves_artisan(&self, artisan_name: &str) -> bool {
        self.items.iter().any(|i| i.artisan.name == artisan_name)
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
