//! PermissionDirectory - Principal storage behind the gate
//!
//! `AccessControl` is the query surface the facade talks to; the directory
//! trait is the storage seam underneath it.

use crate::error::AccessError;
use crate::permission::Permission;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// A principal's role and granted permissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    /// Principal identifier (username, service account, token subject)
    pub principal: String,
    /// Role label, informational only
    pub role: String,
    /// Granted capabilities
    pub permissions: HashSet<Permission>,
}

impl RoleEntry {
    pub fn new(
        principal: impl Into<String>,
        role: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            principal: principal.into(),
            role: role.into(),
            permissions: permissions.into_iter().collect(),
        }
    }
}

/// Storage for role entries, addressable by principal.
///
/// Implementations must never overwrite an existing principal: `register`
/// of a known principal fails with `AlreadyRegistered`.
pub trait PermissionDirectory: Send + Sync {
    /// Store a new entry; rejects duplicates
    fn register(&self, entry: RoleEntry) -> Result<(), AccessError>;

    /// Look up an entry by principal; `None` for unknown principals
    fn lookup(&self, principal: &str) -> Option<RoleEntry>;
}

/// HashMap-backed directory, the default for a single-process core.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    entries: RwLock<HashMap<String, RoleEntry>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PermissionDirectory for InMemoryDirectory {
    fn register(&self, entry: RoleEntry) -> Result<(), AccessError> {
        let mut entries = self.entries.write().expect("directory lock poisoned");
        if entries.contains_key(&entry.principal) {
            return Err(AccessError::AlreadyRegistered(entry.principal));
        }
        entries.insert(entry.principal.clone(), entry);
        Ok(())
    }

    fn lookup(&self, principal: &str) -> Option<RoleEntry> {
        self.entries
            .read()
            .expect("directory lock poisoned")
            .get(principal)
            .cloned()
    }
}

/// The access control gate.
///
/// Pure query layer over a directory: `has_permission` has no side effects
/// and an unknown principal simply holds nothing.
pub struct AccessControl {
    directory: Box<dyn PermissionDirectory>,
}

impl AccessControl {
    /// Build a gate over any directory implementation
    pub fn new(directory: Box<dyn PermissionDirectory>) -> Self {
        Self { directory }
    }

    /// Build a gate over a fresh in-memory directory
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryDirectory::new()))
    }

    /// Register a principal with a role and permission set.
    ///
    /// Fails with `AlreadyRegistered` if the principal exists; existing
    /// entries are never overwritten by this call.
    pub fn add_role(
        &self,
        principal: impl Into<String>,
        role: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Result<(), AccessError> {
        self.directory
            .register(RoleEntry::new(principal, role, permissions))
    }

    /// True if the principal holds the permission. Unknown principal: false.
    pub fn has_permission(&self, principal: &str, permission: Permission) -> bool {
        self.directory
            .lookup(principal)
            .map(|entry| entry.permissions.contains(&permission))
            .unwrap_or(false)
    }
}
