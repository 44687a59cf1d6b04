//! Corebank Ledger - Authoritative store of account balances
//!
//! Exposes the two balance primitives (credit, debit) plus account opening
//! and read-only queries. Business orchestration, permissions and journal
//! records live above this crate; the ledger only guarantees that balances
//! exist, match their currency, and never go negative.

pub mod account;
pub mod error;
pub mod ledger;

pub use account::{Account, AccountType};
pub use error::LedgerError;
pub use ledger::AccountLedger;
