//! IdSequence - Collision-free prefixed identifiers
//!
//! Identifiers are a prefix plus a monotonic counter (`CUST-000001`).
//! Each store owns its own sequence, so two banks in the same process
//! never interfere and ids stay deterministic in tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier generator for a single entity kind.
#[derive(Debug)]
pub struct IdSequence {
    prefix: &'static str,
    counter: AtomicU64,
}

impl IdSequence {
    /// Create a sequence starting at 1
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            counter: AtomicU64::new(1),
        }
    }

    /// Produce the next identifier
    pub fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{:06}", self.prefix, n)
    }
}
