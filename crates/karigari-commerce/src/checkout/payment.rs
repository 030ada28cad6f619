//! Payment method and shipping detail types.

use crate::ids::PaymentId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Credit/debit card, UPI, net banking via the payment aggregator.
    #[default]
    Razorpay,
    /// Digital wallets (Paytm, PhonePe, Google Pay).
    Wallet,
    /// Direct net banking.
    NetBanking,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Razorpay => "razorpay",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::NetBanking => "banking",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Razorpay => "Razorpay",
            PaymentMethod::Wallet => "Digital Wallet",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

/// Shipping details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ShippingDetails {
    /// Check whether every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of required fields still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.state.trim().is_empty() {
            missing.push("state");
        }
        if self.pincode.trim().is_empty() {
            missing.push("pincode");
        }
        missing
    }
}

/// Proof of a successful payment, carrying the opaque identifier issued by
/// the payment provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    /// Opaque payment identifier from the provider.
    pub payment_id: PaymentId,
    /// Amount charged (subtotal plus shipping).
    pub amount: Rupees,
    /// Method the customer paid with.
    pub method: PaymentMethod,
    /// Unix timestamp of payment.
    pub paid_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ShippingDetails {
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
    fn test_complete_details() {
        assert!(details().is_complete());
    }

    #[test]
    fn test_missing_fields_reported() {
        let mut d = details();
        d.email.clear();
        d.pincode = "   ".to_string();
        assert_eq!(d.missing_fields(), vec!["email", "pincode"]);
        assert!(!d.is_complete());
    }
}
