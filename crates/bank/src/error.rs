//! Facade error taxonomy
//!
//! Component errors pass through transparently so callers can match on the
//! specific condition; the variants declared here are the failures only the
//! facade can detect.

use corebank_access::{AccessError, Permission};
use corebank_ledger::LedgerError;
use corebank_registry::RegistryError;
use thiserror::Error;

/// Everything a facade operation can signal.
///
/// All variants are recoverable-by-caller business conditions except
/// `LedgerInconsistency`, which indicates a bug rather than a rejection.
#[derive(Error, Debug)]
pub enum BankError {
    #[error("Permission denied: {principal} lacks {permission}")]
    PermissionDenied {
        principal: String,
        permission: Permission,
    },

    /// Customer exists but is not KYC-verified; account creation refused.
    #[error("Customer {0} is not KYC-verified")]
    KycNotVerified(String),

    #[error("Transfer source and destination are the same account: {0}")]
    SameAccountTransfer(String),

    /// A compensating action failed. The ledger may not balance; this is
    /// never surfaced as an ordinary business rejection.
    #[error("Ledger inconsistency during {operation}: {detail}")]
    LedgerInconsistency { operation: String, detail: String },

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl BankError {
    /// True for the distinguished internal-inconsistency condition
    pub fn is_inconsistency(&self) -> bool {
        matches!(self, BankError::LedgerInconsistency { .. })
    }
}
