//! Corebank Journal - Append-only transaction log
//!
//! Every committed mutating operation leaves exactly one record here per
//! affected account. The journal performs no business validation; it is an
//! ordered, immutable sequence with a per-account index. There is no update
//! or delete API by design.

pub mod log;
pub mod transaction;

pub use log::TransactionJournal;
pub use transaction::{Transaction, TransactionKind};
