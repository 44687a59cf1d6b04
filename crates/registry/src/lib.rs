//! Corebank Registry - Customer records gated by KYC
//!
//! Owns the customer table. A customer record only exists after KYC
//! verification succeeds; the verifier is injected, so the always-approve
//! stub used here can be swapped for a real provider without touching the
//! registry logic.

pub mod customer;
pub mod error;
pub mod kyc;
pub mod registry;

pub use customer::{Customer, CustomerSummary, KycStatus, NewCustomer, ProfileUpdate};
pub use error::RegistryError;
pub use kyc::{AutoApproveKyc, KycVerifier};
pub use registry::CustomerRegistry;
