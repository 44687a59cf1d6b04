//! Access control errors

use thiserror::Error;

/// Errors raised by the permission directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Re-registering a principal is rejected, never an overwrite.
    /// Silent privilege changes are worse than a loud failure.
    #[error("Principal already registered: {0}")]
    AlreadyRegistered(String),
}
