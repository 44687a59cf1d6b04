//! CustomerRegistry - Owner of the customer table

use crate::customer::{Customer, CustomerSummary, KycStatus, NewCustomer, ProfileUpdate};
use crate::error::RegistryError;
use crate::kyc::KycVerifier;
use chrono::Utc;
use corebank_core::IdSequence;
use std::collections::HashMap;
use std::sync::RwLock;

/// Customer store keyed by id, with KYC enforced at the door.
pub struct CustomerRegistry {
    customers: RwLock<HashMap<String, Customer>>,
    ids: IdSequence,
    verifier: Box<dyn KycVerifier>,
}

impl CustomerRegistry {
    pub fn new(verifier: Box<dyn KycVerifier>) -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
            ids: IdSequence::new("CUST"),
            verifier,
        }
    }

    /// Register an applicant.
    ///
    /// Runs KYC verification immediately. On success the record is stored
    /// as `Verified`; on rejection nothing is stored at all, so a partial
    /// customer never exists.
    pub fn register(&self, applicant: NewCustomer) -> Result<String, RegistryError> {
        if !self.verifier.verify(&applicant) {
            let who = format!("{} {}", applicant.first_name, applicant.last_name);
            return Err(RegistryError::KycRejected(who));
        }

        let id = self.ids.next();
        let mut customer = Customer::from_application(id.clone(), applicant);
        customer.kyc_status = KycStatus::Verified;

        self.customers
            .write()
            .expect("registry lock poisoned")
            .insert(id.clone(), customer);
        Ok(id)
    }

    /// Fetch a customer by id (cloned snapshot)
    pub fn get(&self, customer_id: &str) -> Result<Customer, RegistryError> {
        self.customers
            .read()
            .expect("registry lock poisoned")
            .get(customer_id)
            .cloned()
            .ok_or_else(|| RegistryError::CustomerNotFound(customer_id.to_string()))
    }

    /// True if the customer exists and is KYC-verified
    pub fn kyc_verified(&self, customer_id: &str) -> Result<bool, RegistryError> {
        Ok(self.get(customer_id)?.kyc_status == KycStatus::Verified)
    }

    /// Append an account id to the customer's owned list
    pub fn attach_account(
        &self,
        customer_id: &str,
        account_id: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.with_customer(customer_id, |customer| {
            customer.accounts.push(account_id.into());
        })
    }

    /// Apply one enumerated profile change
    pub fn update_profile(
        &self,
        customer_id: &str,
        update: ProfileUpdate,
    ) -> Result<(), RegistryError> {
        self.with_customer(customer_id, |customer| match update {
            ProfileUpdate::FirstName(v) => customer.first_name = v,
            ProfileUpdate::LastName(v) => customer.last_name = v,
            ProfileUpdate::Address(v) => customer.address = v,
            ProfileUpdate::ContactInfo(v) => customer.contact_info = v,
        })
    }

    /// Explicit KYC status transition (e.g. revocation after review)
    pub fn set_kyc_status(
        &self,
        customer_id: &str,
        status: KycStatus,
    ) -> Result<(), RegistryError> {
        self.with_customer(customer_id, |customer| {
            customer.kyc_status = status;
        })
    }

    /// Holdings overview for a customer
    pub fn summary(&self, customer_id: &str) -> Result<CustomerSummary, RegistryError> {
        let customer = self.get(customer_id)?;
        Ok(CustomerSummary {
            customer_id: customer.id.clone(),
            full_name: customer.full_name(),
            accounts: customer.accounts.len(),
            credit_cards: customer.credit_cards.len(),
            loans: customer.loans.len(),
            kyc_status: customer.kyc_status,
        })
    }

    fn with_customer(
        &self,
        customer_id: &str,
        mutate: impl FnOnce(&mut Customer),
    ) -> Result<(), RegistryError> {
        let mut customers = self.customers.write().expect("registry lock poisoned");
        let customer = customers
            .get_mut(customer_id)
            .ok_or_else(|| RegistryError::CustomerNotFound(customer_id.to_string()))?;
        mutate(customer);
        customer.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kyc::testing::RejectAllKyc;
    use crate::kyc::AutoApproveKyc;
    use chrono::NaiveDate;

    fn applicant(name: &str) -> NewCustomer {
        NewCustomer {
            first_name: name.to_string(),
            last_name: "Tester".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 1).unwrap(),
            address: "1 Bank Rd".into(),
            contact_info: format!("{}@example.com", name.to_lowercase()),
            id_documents: vec!["ID-1".into()],
        }
    }

    fn registry() -> CustomerRegistry {
        CustomerRegistry::new(Box::new(AutoApproveKyc))
    }

    #[test]
    fn test_register_verifies_and_stores() {
        let registry = registry();
        let id = registry.register(applicant("Ada")).unwrap();
        let customer = registry.get(&id).unwrap();
        assert_eq!(customer.kyc_status, KycStatus::Verified);
        assert!(registry.kyc_verified(&id).unwrap());
    }

    #[test]
    fn test_kyc_rejection_stores_nothing() {
        let registry = CustomerRegistry::new(Box::new(RejectAllKyc));
        let result = registry.register(applicant("Ada"));
        assert!(matches!(result, Err(RegistryError::KycRejected(_))));

        // The would-be first id is still unassigned
        let ok_registry = CustomerRegistry::new(Box::new(AutoApproveKyc));
        let id = ok_registry.register(applicant("Ada")).unwrap();
        assert!(registry.get(&id).is_err());
    }

    #[test]
    fn test_unique_sequential_ids() {
        let registry = registry();
        let a = registry.register(applicant("Ada")).unwrap();
        let b = registry.register(applicant("Bob")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_attach_account() {
        let registry = registry();
        let id = registry.register(applicant("Ada")).unwrap();
        registry.attach_account(&id, "ACC-000001").unwrap();
        registry.attach_account(&id, "ACC-000002").unwrap();
        let customer = registry.get(&id).unwrap();
        assert_eq!(customer.accounts, vec!["ACC-000001", "ACC-000002"]);
    }

    #[test]
    fn test_attach_account_unknown_customer() {
        let registry = registry();
        let result = registry.attach_account("CUST-999999", "ACC-000001");
        assert!(matches!(result, Err(RegistryError::CustomerNotFound(_))));
    }

    #[test]
    fn test_update_profile_bumps_updated_at() {
        let registry = registry();
        let id = registry.register(applicant("Ada")).unwrap();
        let before = registry.get(&id).unwrap().updated_at;
        registry
            .update_profile(&id, ProfileUpdate::Address("99 Ledger Ln".into()))
            .unwrap();
        let after = registry.get(&id).unwrap();
        assert_eq!(after.address, "99 Ledger Ln");
        assert!(after.updated_at >= before);
    }

    #[test]
    fn test_set_kyc_status() {
        let registry = registry();
        let id = registry.register(applicant("Ada")).unwrap();
        registry.set_kyc_status(&id, KycStatus::Pending).unwrap();
        assert!(!registry.kyc_verified(&id).unwrap());
    }

    #[test]
    fn test_summary_counts() {
        let registry = registry();
        let id = registry.register(applicant("Ada")).unwrap();
        registry.attach_account(&id, "ACC-000001").unwrap();
        let summary = registry.summary(&id).unwrap();
        assert_eq!(summary.accounts, 1);
        assert_eq!(summary.credit_cards, 0);
        assert_eq!(summary.kyc_status, KycStatus::Verified);
        assert_eq!(summary.full_name, "Ada Tester");
    }
}
