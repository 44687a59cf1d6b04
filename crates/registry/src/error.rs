//! Registry errors

use thiserror::Error;

/// Errors raised by the customer registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// KYC verification rejected the applicant; no record was stored.
    #[error("KYC verification failed for applicant {0}")]
    KycRejected(String),
}
