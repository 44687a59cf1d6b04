//! Customer - Identity record and its enumerated updates

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// KYC verification state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Submitted, not yet verified
    Pending,
    /// Identity verified, may own accounts
    Verified,
}

/// Applicant data for `CustomerRegistry::register`.
///
/// Everything the caller supplies; ids, status, ownership links and
/// timestamps are assigned by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub contact_info: String,
    /// Identity document references (passport number, national id, ...)
    pub id_documents: Vec<String>,
}

/// A registered customer.
///
/// Account/card/loan ids are back-references for lookup only; balances and
/// lifecycles live in their owning stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub contact_info: String,
    pub id_documents: Vec<String>,
    pub kyc_status: KycStatus,
    /// Owned account ids, in attachment order
    pub accounts: Vec<String>,
    pub credit_cards: Vec<String>,
    pub loans: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a fresh record from applicant data, starting as `Pending`.
    pub fn from_application(id: String, data: NewCustomer) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            date_of_birth: data.date_of_birth,
            address: data.address,
            contact_info: data.contact_info,
            id_documents: data.id_documents,
            kyc_status: KycStatus::Pending,
            accounts: Vec::new(),
            credit_cards: Vec::new(),
            loans: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The set of profile fields a caller may change after registration.
///
/// Replaces field-name-string mutation: an unknown field is a compile
/// error here, not a runtime lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProfileUpdate {
    FirstName(String),
    LastName(String),
    Address(String),
    ContactInfo(String),
}

/// Aggregated view of a customer's holdings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub full_name: String,
    pub accounts: usize,
    pub credit_cards: usize,
    pub loans: usize,
    pub kyc_status: KycStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant() -> NewCustomer {
        NewCustomer {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
            address: "12 Analytical St".into(),
            contact_info: "ada@example.com".into(),
            id_documents: vec!["PASSPORT-X123".into()],
        }
    }

    #[test]
    fn test_fresh_record_is_pending() {
        let customer = Customer::from_application("CUST-000001".into(), applicant());
        assert_eq!(customer.kyc_status, KycStatus::Pending);
        assert!(customer.accounts.is_empty());
        assert_eq!(customer.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_kyc_status_strings() {
        assert_eq!(KycStatus::Pending.to_string(), "pending");
        assert_eq!(KycStatus::Verified.to_string(), "verified");
    }

    #[test]
    fn test_customer_serde() {
        let customer = Customer::from_application("CUST-000001".into(), applicant());
        let json = serde_json::to_string(&customer).unwrap();
        assert!(json.contains("\"kyc_status\":\"pending\""));
    }
}
