//! Amount - Non-negative decimal wrapper for monetary values
//!
//! Every balance and every movement in Corebank is an `Amount`.
//! Negative values are unrepresentable, which makes the ledger's
//! "balance never below zero" invariant a type-level guarantee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when constructing an Amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative decimal amount.
///
/// # Invariant
/// The wrapped value is always >= 0, enforced by every constructor.
/// Arithmetic that would cross zero returns `None` instead of wrapping.
///
/// # Example
/// ```
/// use corebank_core::Amount;
/// use rust_decimal::Decimal;
///
/// let balance = Amount::new(Decimal::new(20000, 2)).unwrap(); // 200.00
/// let debit = Amount::new(Decimal::new(15000, 2)).unwrap();   // 150.00
/// let rest = balance.checked_sub(&debit).unwrap();
/// assert_eq!(rest.value(), Decimal::new(5000, 2));            // 50.00
///
/// // Underflow is a None, never a negative balance
/// assert!(debit.checked_sub(&balance).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an Amount, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            Err(AmountError::Negative(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True if the amount is exactly zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the amount is strictly greater than zero
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checked addition; `None` on Decimal overflow
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction; `None` if the result would be negative
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        let result = self.0.checked_sub(other.0)?;
        if result < Decimal::ZERO {
            None
        } else {
            Some(Amount(result))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_positive_amount() {
        let amount = Amount::new(dec!(100.25)).unwrap();
        assert_eq!(amount.value(), dec!(100.25));
        assert!(amount.is_positive());
    }

    #[test]
    fn test_zero_amount() {
        let amount = Amount::new(Decimal::ZERO).unwrap();
        assert!(amount.is_zero());
        assert!(!amount.is_positive());
    }

    #[test]
    fn test_negative_rejected() {
        let result = Amount::new(dec!(-0.01));
        assert!(matches!(result, Err(AmountError::Negative(_))));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let amount = Amount::new(dec!(-0.0)).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_checked_sub_underflow() {
        let a = Amount::new(dec!(50)).unwrap();
        let b = Amount::new(dec!(50.01)).unwrap();
        assert!(a.checked_sub(&b).is_none());
    }

    #[test]
    fn test_checked_sub_to_zero() {
        let a = Amount::new(dec!(50)).unwrap();
        let result = a.checked_sub(&a).unwrap();
        assert!(result.is_zero());
    }

    #[test]
    fn test_checked_add() {
        let a = Amount::new(dec!(0.1)).unwrap();
        let b = Amount::new(dec!(0.2)).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().value(), dec!(0.3));
    }

    #[test]
    fn test_serde_as_string() {
        let amount = Amount::new(dec!(123.45)).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        let parsed: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, parsed);
    }

    #[test]
    fn test_serde_rejects_negative() {
        let result: Result<Amount, _> = serde_json::from_str("\"-5\"");
        assert!(result.is_err());
    }
}
