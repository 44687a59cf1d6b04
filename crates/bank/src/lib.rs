//! Corebank Bank - The orchestrating facade
//!
//! Every public operation runs the same three-phase protocol:
//! 1. Authorize - permission check before any other work
//! 2. Validate & apply - resolve entities, check invariants, mutate
//! 3. Record - append one journal record per affected account
//!
//! The facade is the single choke point for writes; the component crates
//! underneath never call each other.

pub mod bank;
pub mod crypto;
pub mod error;
pub mod locks;
pub mod receipt;

pub use bank::{Bank, BankBuilder};
pub use crypto::{EncryptionProvider, PassthroughCipher};
pub use error::BankError;
pub use receipt::{AccountStatement, Receipt, TransferReceipt};
