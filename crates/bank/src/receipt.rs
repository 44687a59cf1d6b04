//! Receipts - What a committed operation hands back to the caller

use corebank_core::{Amount, Currency};
use corebank_journal::{Transaction, TransactionKind};
use serde::{Deserialize, Serialize};

/// Outcome of one committed movement on one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_id: String,
    pub account_id: String,
    pub kind: TransactionKind,
    pub amount: Amount,
    pub currency: Currency,
    /// Account balance after commit
    pub balance: Amount,
}

impl From<&Transaction> for Receipt {
    fn from(txn: &Transaction) -> Self {
        Self {
            transaction_id: txn.id.clone(),
            account_id: txn.account_id.clone(),
            kind: txn.kind.clone(),
            amount: txn.amount,
            currency: txn.currency.clone(),
            balance: txn.balance_after,
        }
    }
}

/// Outcome of a committed transfer: one movement per side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub outgoing: Receipt,
    pub incoming: Receipt,
}

/// Consistent read of one account: balance plus its transaction history,
/// taken under the account's serialization guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatement {
    pub account_id: String,
    pub balance: Amount,
    pub transactions: Vec<Transaction>,
}
