//! Per-account serialization for mutating operations
//!
//! Each account gets its own mutex, handed out lazily. A mutating facade
//! operation holds the account's guard across both the balance change and
//! the journal append, so the pair is perceived atomically. Transfers
//! acquire both guards in ascending account-id order, which makes opposing
//! transfers between the same pair deadlock-free.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Lazily grown table of per-account mutexes.
#[derive(Debug, Default)]
pub struct AccountLocks {
    table: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock handle for one account. Callers lock the returned handle
    /// and keep the guard for the duration of the operation.
    pub fn handle(&self, account_id: &str) -> Arc<Mutex<()>> {
        let mut table = self.table.lock().expect("lock table poisoned");
        Arc::clone(table.entry(account_id.to_string()).or_default())
    }

    /// Handles for two distinct accounts, ordered by ascending account id.
    /// Locking first-then-second is the deadlock-avoidance protocol.
    pub fn ordered_pair(&self, a: &str, b: &str) -> (Arc<Mutex<()>>, Arc<Mutex<()>>) {
        debug_assert_ne!(a, b, "pair ordering requires distinct accounts");
        if a <= b {
            (self.handle(a), self.handle(b))
        } else {
            (self.handle(b), self.handle(a))
        }
    }
}
