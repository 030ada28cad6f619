//! Artisan dashboard views over orders.
//!
//! The dashboard reads the same order data the customer sees, filtered to
//! one artisan: an order list with search and status filtering, and an
//! earnings roll-up.

use crate::checkout::{Order, OrderStatus};
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Filter for the dashboard's order list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderFilter {
    /// Free-text search over order number, customer, and item names.
    pub search: Option<String>,
    /// Restrict to one fulfillment status.
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    /// Match everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        if !term.is_empty() {
            self.search = Some(term);
        }
        self
    }

    /// Restrict to a status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check whether an order passes the filter.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = order.order_number.to_lowercase().contains(&term)
                || order.customer.to_lowercase().contains(&term)
                || order
                    .items
                    .iter()
                    .any(|i| i.name.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Apply the filter over a slice of orders.
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

/// Earnings roll-up shown on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EarningsSummary {
    /// Revenue from delivered orders.
    pub total_earned: Rupees,
    /// Revenue from orders still in flight.
    pub pending_amount: Rupees,
    /// Number of orders counted.
    pub order_count: u64,
    /// Average order value across all counted orders.
    pub average_order_value: Rupees,
}

impl EarningsSummary {
    /// Aggregate earnings over an order list.
    ///
    /// Delivered orders count as earned; everything else is pending.
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut total_earned = Rupees::zero();
        let mut pending_amount = Rupees::zero();
        for order in orders {
            if order.status.is_terminal() {
                total_earned = total_earned + order.grand_total;
            } else {
                pending_amount = pending_amount + order.grand_total;
            }
        }
        let order_count = orders.len() as u64;
        let average_order_value = if order_count == 0 {
            Rupees::zero()
        } else {
            Rupees::new(
                (total_earned + pending_amount).amount() / order_count as i64,
            )
        };

        Self {
            total_earned,
            pending_amount,
            order_count,
            average_order_value,
        }
    }

    /// Aggregate earnings over the subset of orders involving an artisan.
    pub fn for_artisan(orders: &[Order], artisan_name: &str) -> Self {
        let mine: Vec<Order> = orders
            .iter()
            .filter(|o| o.involves_artisan(artisan_name))
            .cloned()
            .collect();
        Self::from_orders(&mine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::catalog::{ArtisanRef, CraftCategory};
    use crate::checkout::{PaymentMethod, PaymentReceipt};
    use crate::ids::{OrderId, PaymentId, ProductId};

    fn order(number: &str, customer: &str, total: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId::generate(),
            order_number: number.to_string(),
            customer: customer.to_string(),
            email: "customer@example.com".to_string(),
            items: vec![CartItem {
                id: ProductId::new("1"),
                name: "Handwoven Banarasi Silk Saree".to_string(),
                price: Rupees::new(total),
                image: "/placeholder.svg".to_string(),
                artisan: ArtisanRef::new("Priya Sharma", "Varanasi, UP"),
                category: CraftCategory::Textiles,
                quantity: 1,
            }],
            subtotal: Rupees::new(total),
            shipping_total: Rupees::zero(),
            grand_total: Rupees::new(total),
            payment: PaymentReceipt {
                payment_id: PaymentId::generate(),
                amount: Rupees::new(total),
                method: PaymentMethod::Razorpay,
                paid_at: 0,
            },
            status,
            placed_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_filter_by_status() {
        let orders = vec![
            order("ORD-001", "Amit Singh", 15000, OrderStatus::Pending),
            order("ORD-002", "Kavya Nair", 2500, OrderStatus::Shipped),
        ];
        let shipped = OrderFilter::all()
            .with_status(OrderStatus::Shipped)
            .apply(&orders);
        assert_eq!(shipped.len(), 1);
        assert_eq!(shipped[0].order_number, "ORD-002");
    }

    #[test]
    fn test_filter_by_search() {
        let orders = vec![
            order("ORD-001", "Amit Singh", 15000, OrderStatus::Pending),
            order("ORD-002", "Kavya Nair", 2500, OrderStatus::Shipped),
        ];
        assert_eq!(OrderFilter::all().with_search("amit").apply(&orders).len(), 1);
        assert_eq!(OrderFilter::all().with_search("saree").apply(&orders).len(), 2);
        assert_eq!(OrderFilter::all().with_search("ord-002").apply(&orders).len(), 1);
    }

    #[test]
    fn test_earnings_split_by_status() {
        let orders = vec![
            order("ORD-001", "Amit Singh", 15000, OrderStatus::Delivered),
            order("ORD-002", "Kavya Nair", 2500, OrderStatus::Shipped),
            order("ORD-003", "Rohan Das", 500, OrderStatus::Pending),
        ];
        let summary = EarningsSummary::from_orders(&orders);
        assert_eq!(summary.total_earned, Rupees::new(15000));
        assert_eq!(summary.pending_amount, Rupees::new(3000));
        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.average_order_value, Rupees::new(6000));
    }

    #[test]
    fn test_earnings_empty() {
        let summary = EarningsSummary::from_orders(&[]);
        assert_eq!(summary.order_count, 0);
        assert_eq!(summary.average_order_value, Rupees::zero());
    }

    #[test]
    fn test_earnings_for_artisan() {
        let orders = vec![order(
            "ORD-001",
            "Amit Singh",
            15000,
            OrderStatus::Delivered,
        )];
        let mine = EarningsSummary::for_artisan(&orders, "Priya Sharma");
        assert_eq!(mine.total_earned, Rupees::new(15000));
        let theirs = EarningsSummary::for_artisan(&orders, "Ravi Shankar");
        assert_eq!(theirs.order_count, 0);
    }
}
