//! Corebank Access - Role-based permission gate
//!
//! Maps a principal (the authenticated actor) to a role and a permission
//! set, and answers yes/no permission queries. Storage sits behind the
//! `PermissionDirectory` trait so an LDAP- or token-backed directory can
//! replace the in-memory one without touching callers.

pub mod directory;
pub mod error;
pub mod permission;

pub use directory::{AccessControl, InMemoryDirectory, PermissionDirectory, RoleEntry};
pub use error::AccessError;
pub use permission::Permission;
