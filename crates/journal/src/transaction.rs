//! Transaction - One committed movement on one account

use chrono::{DateTime, Utc};
use corebank_core::{Amount, Currency};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// What kind of movement a record describes.
///
/// A transfer yields two records: `transfer-out` on the source account and
/// `transfer-in` on the destination. Open to extension via `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
    #[strum(default)]
    Other(String),
}

/// An immutable journal record.
///
/// `balance_after` is the account balance at commit time, so a statement
/// can be audited without replaying the whole log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub amount: Amount,
    pub currency: Currency,
    pub kind: TransactionKind,
    pub balance_after: Amount,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Build a record with a fresh commit-time id.
    pub fn record(
        account_id: impl Into<String>,
        amount: Amount,
        currency: Currency,
        kind: TransactionKind,
        balance_after: Amount,
    ) -> Self {
        Self {
            id: format!("TXN-{}", Uuid::new_v4().simple()),
            account_id: account_id.into(),
            amount,
            currency,
            kind,
            balance_after,
            timestamp: Utc::now(),
        }
    }
}
