//! Account - A single balance-bearing record

use chrono::{DateTime, Utc};
use corebank_core::{Amount, Currency};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account product type. Open enumeration: unknown labels parse into
/// `Other` rather than failing, so new products need no code change here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccountType {
    Savings,
    Checking,
    Investment,
    Other(String),
}

impl AccountType {
    pub fn label(&self) -> &str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Checking => "checking",
            AccountType::Investment => "investment",
            AccountType::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AccountType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "savings" => AccountType::Savings,
            "checking" => AccountType::Checking,
            "investment" => AccountType::Investment,
            other => AccountType::Other(other.to_string()),
        })
    }
}

impl TryFrom<String> for AccountType {
    type Error = std::convert::Infallible;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AccountType> for String {
    fn from(t: AccountType) -> Self {
        t.label().to_string()
    }
}

/// A customer-owned account.
///
/// `customer_id` must reference a KYC-verified customer; that precondition
/// is checked by the facade before `AccountLedger::open` runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub customer_id: String,
    pub account_type: AccountType,
    pub currency: Currency,
    pub balance: Amount,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        id: String,
        customer_id: String,
        account_type: AccountType,
        currency: Currency,
        opening_balance: Amount,
    ) -> Self {
        Self {
            id,
            customer_id,
            account_type,
            currency,
            balance: opening_balance,
            created_at: Utc::now(),
        }
    }
}
