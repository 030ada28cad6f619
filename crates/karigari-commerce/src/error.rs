//! Marketplace error types.
//!
//! Cart mutations are deliberately absent here: the four cart operations
//! are total functions and cannot fail.

use thiserror::Error;

/// Errors that can occur in marketplace operations.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Checkout attempted with an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Shipping details are incomplete.
    #[error("Shipping details incomplete: missing {0}")]
    ShippingIncomplete(String),

    /// A payment is already being processed for this checkout.
    #[error("Payment already in progress")]
    PaymentInProgress,

    /// Checkout has already completed.
    #[error("Checkout already completed with payment {0}")]
    AlreadyCompleted(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MarketError {
    fn from(e: serde_json::Error) -> Self {
        MarketError::Serialization(e.to_string())
    }
}
