//! Permission - Typed capability names
//!
//! One variant per gated facade operation. The string forms are the
//! permission names an external directory would hand out.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Capabilities a principal may hold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Register new customers (runs KYC)
    RegisterCustomer,
    /// Open accounts for verified customers
    CreateAccount,
    /// Credit funds into an account
    ProcessDeposit,
    /// Debit funds out of an account
    ProcessWithdrawal,
    /// Move funds between two accounts
    ProcessTransfer,
    /// Read sensitive data through the decryption stub
    DecryptData,
}

impl Permission {
    /// Every permission, for seeding full-access roles
    pub const ALL: [Permission; 6] = [
        Permission::RegisterCustomer,
        Permission::CreateAccount,
        Permission::ProcessDeposit,
        Permission::ProcessWithdrawal,
        Permission::ProcessTransfer,
        Permission::DecryptData,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_string_forms() {
        assert_eq!(Permission::RegisterCustomer.to_string(), "register_customer");
        assert_eq!(Permission::ProcessTransfer.to_string(), "process_transfer");
        assert_eq!(Permission::DecryptData.to_string(), "decrypt_data");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Permission::from_str("process_deposit").unwrap(),
            Permission::ProcessDeposit
        );
        assert!(Permission::from_str("drop_tables").is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Permission::CreateAccount).unwrap();
        assert_eq!(json, "\"create_account\"");
    }
}
