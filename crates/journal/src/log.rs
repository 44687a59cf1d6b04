//! TransactionJournal - Ordered, immutable sequence with account index

use crate::transaction::Transaction;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct JournalInner {
    records: Vec<Transaction>,
    /// account id -> indices into `records`, in append order
    by_account: HashMap<String, Vec<usize>>,
}

/// Append-only log of committed transactions.
///
/// `append` never rejects a well-formed record; validation happened at the
/// facade before commit. Queries return cloned snapshots in creation order.
#[derive(Debug, Default)]
pub struct TransactionJournal {
    inner: RwLock<JournalInner>,
}

impl TransactionJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. O(1) amortized.
    pub fn append(&self, record: Transaction) {
        let mut inner = self.inner.write().expect("journal lock poisoned");
        let index = inner.records.len();
        inner
            .by_account
            .entry(record.account_id.clone())
            .or_default()
            .push(index);
        inner.records.push(record);
    }

    /// All records touching one account, in creation order
    pub fn for_account(&self, account_id: &str) -> Vec<Transaction> {
        let inner = self.inner.read().expect("journal lock poisoned");
        inner
            .by_account
            .get(account_id)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| inner.records[i].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The full log in creation order
    pub fn all(&self) -> Vec<Transaction> {
        self.inner
            .read()
            .expect("journal lock poisoned")
            .records
            .clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("journal lock poisoned").records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use corebank_core::{Amount, Currency};
    use rust_decimal_macros::dec;

    fn deposit(account_id: &str, value: rust_decimal::Decimal) -> Transaction {
        let amount = Amount::new(value).unwrap();
        Transaction::record(account_id, amount, Currency::Usd, TransactionKind::Deposit, amount)
    }

    #[test]
    fn test_append_and_query_order() {
        let journal = TransactionJournal::new();
        journal.append(deposit("ACC-1", dec!(10)));
        journal.append(deposit("ACC-2", dec!(20)));
        journal.append(deposit("ACC-1", dec!(30)));

        let acc1 = journal.for_account("ACC-1");
        assert_eq!(acc1.len(), 2);
        assert_eq!(acc1[0].amount.value(), dec!(10));
        assert_eq!(acc1[1].amount.value(), dec!(30));

        assert_eq!(journal.all().len(), 3);
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn test_unknown_account_is_empty() {
        let journal = TransactionJournal::new();
        assert!(journal.for_account("ACC-404").is_empty());
        assert!(journal.is_empty());
    }

    #[test]
    fn test_full_log_preserves_interleaving() {
        let journal = TransactionJournal::new();
        journal.append(deposit("ACC-2", dec!(1)));
        journal.append(deposit("ACC-1", dec!(2)));
        let all = journal.all();
        assert_eq!(all[0].account_id, "ACC-2");
        assert_eq!(all[1].account_id, "ACC-1");
    }
}
