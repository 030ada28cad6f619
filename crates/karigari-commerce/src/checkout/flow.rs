//! Checkout flow state machine.
//!
//! The flow guards two properties the cart itself does not:
//!
//! - a payment cannot be submitted twice concurrently: `begin_payment`
//!   transitions to `Processing` synchronously and rejects re-entry;
//! - the cart is cleared at most once per checkout, and only on the
//!   success path carrying the provider's payment identifier. A failed
//!   payment returns to `Editing` with the cart untouched.

use crate::cart::{CartSnapshot, CartStore};
use crate::checkout::{
    Order, OrderStatus, PaymentMethod, PaymentReceipt, ShippingDetails, ShippingQuote,
};
use crate::error::MarketError;
use crate::ids::{OrderId, PaymentId};

/// State of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutState {
    /// Customer is filling in shipping and payment details.
    Editing,
    /// Payment submitted, awaiting the provider callback.
    Processing,
    /// Payment succeeded and the order was placed.
    Completed,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Editing => "editing",
            CheckoutState::Processing => "processing",
            CheckoutState::Completed => "completed",
        }
    }
}

/// A single checkout attempt over the session cart.
#[derive(Debug)]
pub struct CheckoutFlow {
    shipping: ShippingDetails,
    payment_method: PaymentMethod,
    state: CheckoutState,
    receipt: Option<PaymentReceipt>,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    /// Start a fresh checkout.
    pub fn new() -> Self {
        Self {
            shipping: ShippingDetails::default(),
            payment_method: PaymentMethod::default(),
            state: CheckoutState::Editing,
            receipt: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// The receipt, once completed.
    pub fn receipt(&self) -> Option<&PaymentReceipt> {
        self.receipt.as_ref()
    }

    /// Shipping details entered so far.
    pub fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    /// Selected payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Update shipping details. Only allowed while editing.
    pub fn set_shipping(&mut self, details: ShippingDetails) -> Result<(), MarketError> {
        self.ensure_editing()?;
        self.shipping = details;
        Ok(())
    }

    /// Select a payment method. Only allowed while editing.
    pub fn set_payment_method(&mut self, method: PaymentMethod) -> Result<(), MarketError> {
        self.ensure_editing()?;
        self.payment_method = method;
        Ok(())
    }

    /// Quote shipping for the given cart state.
    pub fn quote(&self, cart: &CartSnapshot) -> ShippingQuote {
        ShippingQuote::for_subtotal(cart.total)
    }

    /// Submit the payment.
    ///
    /// Validates the cart and shipping details, then moves to
    /// `Processing`. A second call while processing fails with
    /// [`MarketError::PaymentInProgress`], which is what disables the pay
    /// button against double submission.
    pub fn begin_payment(&mut self, cart: &CartSnapshot) -> Result<ShippingQuote, MarketError> {
        match self.state {
            CheckoutState::Processing => return Err(MarketError::PaymentInProgress),
            CheckoutState::Completed => {
                return Err(self.already_completed());
            }
            CheckoutState::Editing => {}
        }
        if cart.is_empty() {
            return Err(MarketError::EmptyCart);
        }
        if !self.shipping.is_complete() {
            return Err(MarketError::ShippingIncomplete(
                self.shipping.missing_fields().join(", "),
            ));
        }

        self.state = CheckoutState::Processing;
        Ok(self.quote(cart))
    }

    /// Handle the provider's success callback.
    ///
    /// Places the order from the cart's current state, then clears the
    /// cart through the store. The transition to `Completed` makes this a
    /// once-only path: a duplicate success callback gets
    /// [`MarketError::AlreadyCompleted`] and cannot clear a cart the
    /// customer has started refilling.
    pub fn complete(
        &mut self,
        store: &mut CartStore,
        payment_id: PaymentId,
    ) -> Result<Order, MarketError> {
        match self.state {
            CheckoutState::Editing => {
                return Err(MarketError::InvalidTransition {
                    from: self.state.as_str().to_string(),
                    to: CheckoutState::Completed.as_str().to_string(),
                })
            }
            CheckoutState::Completed => return Err(self.already_completed()),
            CheckoutState::Processing => {}
        }

        let snapshot = store.snapshot();
        let quote = self.quote(&snapshot);
        let now = current_timestamp();
        let receipt = PaymentReceipt {
            payment_id,
            amount: quote.grand_total(),
            method: self.payment_method,
            paid_at: now,
        };

        let order = Order {
            id: OrderId::generate(),
            order_number: Order::generate_order_number(),
            customer: self.shipping.full_name.clone(),
            email: self.shipping.email.clone(),
            items: snapshot.items,
            subtotal: snapshot.total,
            shipping_total: quote.cost,
            grand_total: quote.grand_total(),
            payment: receipt.clone(),
            status: OrderStatus::Pending,
            placed_at: now,
            updated_at: now,
        };

        store.clear_cart();
        self.receipt = Some(receipt);
        self.state = CheckoutState::Completed;
        tracing::info!(
            order_number = %order.order_number,
            payment_id = %order.payment.payment_id,
            total = %order.grand_total,
            "checkout completed"
        );

        Ok(order)
    }

    /// Handle a failed or abandoned payment: back to editing, cart kept.
    pub fn fail(&mut self) -> Result<(), MarketError> {
        match self.state {
            CheckoutState::Processing => {
                self.state = CheckoutState::Editing;
                Ok(())
            }
            CheckoutState::Completed => Err(self.already_completed()),
            CheckoutState::Editing => Ok(()),
        }
    }

    fn ensure_editing(&self) -> Result<(), MarketError> {
        match self.state {
            CheckoutState::Editing => Ok(()),
            CheckoutState::Processing => Err(MarketError::PaymentInProgress),
            CheckoutState::Completed => Err(self.already_completed()),
        }
    }

    fn already_completed(&self) -> MarketError {
        let payment = self
            .receipt
            .as_ref()
            .map(|r| r.payment_id.to_string())
            .unwrap_or_default();
        MarketError::AlreadyCompleted(payment)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArtisanRef, CraftCategory};
    use crate::cart::ProductRef;
    use crate::ids::ProductId;
    use crate::money::Rupees;

    fn product(id: &str, price: i64) -> ProductRef {
        ProductRef {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Rupees::new(price),
            image: "/placeholder.svg".to_string(),
            artisan: ArtisanRef::new("Sunita Jha", "Madhubani, BR"),
            category: CraftCategory::Art,
        }
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            full_name: "Ananya Rao".to_string(),
            email: "ananya@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "14 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
        }
    }

    #[test]
    fn test_happy_path_clears_cart_once() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 4500));

        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping()).unwrap();
        flow.begin_payment(&store.snapshot()).unwrap();

        let order = flow
            .complete(&mut store, PaymentId::new("pay_mock_123456"))
            .unwrap();
        assert_eq!(order.subtotal, Rupees::new(4500));
        assert_eq!(order.shipping_total, Rupees::zero());
        assert!(store.snapshot().is_empty());

        // Duplicate success callback must not clear a refilled cart.
        store.add_to_cart(product("b", 100));
        let err = flow
            .complete(&mut store, PaymentId::new("pay_mock_999"))
            .unwrap_err();
        assert!(matches!(err, MarketError::AlreadyCompleted(_)));
        assert_eq!(store.snapshot().item_count, 1);
    }

    #[test]
    fn test_double_submission_rejected() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 1000));

        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping()).unwrap();
        flow.begin_payment(&store.snapshot()).unwrap();

        let err = flow.begin_payment(&store.snapshot()).unwrap_err();
        assert!(matches!(err, MarketError::PaymentInProgress));
    }

    #[test]
    fn test_failure_keeps_cart() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 1000));

        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping()).unwrap();
        flow.begin_payment(&store.snapshot()).unwrap();
        flow.fail().unwrap();

        assert_eq!(flow.state(), CheckoutState::Editing);
        assert_eq!(store.snapshot().item_count, 1);

        // The customer can retry.
        assert!(flow.begin_payment(&store.snapshot()).is_ok());
    }

    #[test]
    fn test_empty_cart_rejected() {
        let store = CartStore::new();
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping()).unwrap();

        let err = flow.begin_payment(&store.snapshot()).unwrap_err();
        assert!(matches!(err, MarketError::EmptyCart));
    }

    #[test]
    fn test_incomplete_shipping_rejected() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 1000));

        let mut details = shipping();
        details.pincode.clear();

        let mut flow = CheckoutFlow::new();
        flow.set_shipping(details).unwrap();

        let err = flow.begin_payment(&store.snapshot()).unwrap_err();
        assert!(matches!(err, MarketError::ShippingIncomplete(_)));
    }

    #[test]
    fn test_shipping_charged_below_threshold() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 1000));

        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping()).unwrap();
        let quote = flow.begin_payment(&store.snapshot()).unwrap();
        assert_eq!(quote.cost, Rupees::new(150));

        let order = flow
            .complete(&mut store, PaymentId::new("pay_mock_1"))
            .unwrap();
        assert_eq!(order.grand_total, Rupees::new(1150));
        assert_eq!(order.payment.amount, Rupees::new(1150));
    }

    #[test]
    fn test_no_edits_while_processing() {
        let mut store = CartStore::new();
        store.add_to_cart(product("a", 1000));

        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping()).unwrap();
        flow.begin_payment(&store.snapshot()).unwrap();

        assert!(matches!(
            flow.set_payment_method(PaymentMethod::Wallet),
            Err(MarketError::PaymentInProgress)
        ));
    }
}
