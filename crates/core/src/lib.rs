//! Corebank Core - Shared domain primitives
//!
//! This crate contains the fundamental types used across Corebank:
//! - `Amount`: Non-negative decimal wrapper for balances and movements
//! - `Currency`: Type-safe currency codes
//! - `IdSequence`: Collision-free prefixed identifier generator

pub mod amount;
pub mod currency;
pub mod id;

pub use amount::{Amount, AmountError};
pub use currency::{Currency, CurrencyError};
pub use id::IdSequence;
