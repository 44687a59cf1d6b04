//! KycVerifier - Injectable identity verification seam
//!
//! The registry calls `verify` synchronously during registration. A real
//! provider (document checks, watchlists) slots in behind the same trait.

use crate::customer::NewCustomer;

/// Identity verification capability.
pub trait KycVerifier: Send + Sync {
    /// Verifier name for logging
    fn name(&self) -> &str;

    /// True if the applicant passes verification
    fn verify(&self, applicant: &NewCustomer) -> bool;
}

/// Stub verifier that approves every applicant.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoApproveKyc;

impl KycVerifier for AutoApproveKyc {
    fn name(&self) -> &str {
        "AutoApproveKyc"
    }

    fn verify(&self, _applicant: &NewCustomer) -> bool {
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Rejects everyone, for exercising the failure path.
    pub struct RejectAllKyc;

    impl KycVerifier for RejectAllKyc {
        fn name(&self) -> &str {
            "RejectAllKyc"
        }

        fn verify(&self, _applicant: &NewCustomer) -> bool {
            false
        }
    }
}
