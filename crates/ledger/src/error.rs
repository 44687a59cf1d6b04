//! Ledger errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by balance primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Currency mismatch on {account_id}: account holds {expected}, got {actual}")]
    CurrencyMismatch {
        account_id: String,
        expected: String,
        actual: String,
    },

    #[error("Insufficient funds on {account_id}: requested {requested}, available {available}")]
    InsufficientFunds {
        account_id: String,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
