//! Rupee amounts for marketplace pricing.
//!
//! Prices on the marketplace are whole-rupee integers; paise never appear
//! in domain state. Arithmetic saturates so that totals derived from a cart
//! are total functions of its items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A whole-rupee INR amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Rupees(pub i64);

impl Rupees {
    /// Create an amount from whole rupees.
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the raw rupee amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Saturating addition.
    pub fn saturating_add(&self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(&self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_sub(other.0))
    }

    /// Saturating multiplication by a quantity.
    pub fn saturating_mul(&self, factor: i64) -> Rupees {
        Rupees(self.0.saturating_mul(factor))
    }

    /// Format as a display string with the rupee sign (e.g., "₹15,000").
    ///
    /// Uses Indian digit grouping: the last three digits, then groups of
    /// two (₹1,50,000).
    pub fn display(&self) -> String {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let grouped = group_indian(&digits);
        if negative {
            format!("-₹{grouped}")
        } else {
            format!("₹{grouped}")
        }
    }
}

/// Group a digit string in the Indian style.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let bytes = head.as_bytes();
    let mut start = bytes.len() % 2;
    if start == 1 {
        parts.push(&head[..1]);
    } else {
        start = 0;
    }
    while start < head.len() {
        parts.push(&head[start..start + 2]);
        start += 2;
    }
    format!("{},{}", parts.join(","), tail)
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, other: Rupees) -> Rupees {
        self.saturating_add(other)
    }
}

impl Sub for Rupees {
    type Output = Rupees;

    fn sub(self, other: Rupees) -> Rupees {
        self.saturating_sub(other)
    }
}

impl Mul<i64> for Rupees {
    type Output = Rupees;

    fn mul(self, factor: i64) -> Rupees {
        self.saturating_mul(factor)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Rupees {
        iter.fold(Rupees::zero(), |acc, r| acc + r)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_arithmetic() {
        let a = Rupees::new(15000);
        let b = Rupees::new(2500);
        assert_eq!((a + b).amount(), 17500);
        assert_eq!((a - b).amount(), 12500);
        assert_eq!((b * 2).amount(), 5000);
    }

    #[test]
    fn test_saturation() {
        let max = Rupees::new(i64::MAX);
        assert_eq!((max + Rupees::new(1)).amount(), i64::MAX);
        assert_eq!(max.saturating_mul(2).amount(), i64::MAX);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Rupees::new(150).display(), "₹150");
        assert_eq!(Rupees::new(2500).display(), "₹2,500");
        assert_eq!(Rupees::new(15000).display(), "₹15,000");
        assert_eq!(Rupees::new(150000).display(), "₹1,50,000");
        assert_eq!(Rupees::new(12345678).display(), "₹1,23,45,678");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Rupees::new(-2500).display(), "-₹2,500");
    }

    #[test]
    fn test_sum() {
        let total: Rupees = [Rupees::new(100), Rupees::new(250)].into_iter().sum();
        assert_eq!(total.amount(), 350);
    }
}
