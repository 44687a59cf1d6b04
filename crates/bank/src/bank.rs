//! Bank - The facade over registry, ledger, journal and the access gate

use crate::crypto::{EncryptionProvider, PassthroughCipher};
use crate::error::BankError;
use crate::locks::AccountLocks;
use crate::receipt::{AccountStatement, Receipt, TransferReceipt};
use corebank_access::{AccessControl, Permission, PermissionDirectory};
use corebank_core::{Amount, Currency};
use corebank_journal::{Transaction, TransactionJournal, TransactionKind};
use corebank_ledger::{AccountLedger, AccountType};
use corebank_registry::{
    AutoApproveKyc, Customer, CustomerRegistry, CustomerSummary, KycStatus, KycVerifier,
    NewCustomer, ProfileUpdate,
};
use tracing::{debug, info, warn};

/// Assembles a `Bank` with injectable collaborators.
///
/// Defaults are the in-process stubs: auto-approving KYC, an in-memory
/// permission directory, and the passthrough cipher.
pub struct BankBuilder {
    institution_name: String,
    institution_id: String,
    verifier: Box<dyn KycVerifier>,
    access: AccessControl,
    cipher: Box<dyn EncryptionProvider>,
}

impl BankBuilder {
    pub fn verifier(mut self, verifier: Box<dyn KycVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn directory(mut self, directory: Box<dyn PermissionDirectory>) -> Self {
        self.access = AccessControl::new(directory);
        self
    }

    pub fn cipher(mut self, cipher: Box<dyn EncryptionProvider>) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn build(self) -> Bank {
        Bank {
            institution_name: self.institution_name,
            institution_id: self.institution_id,
            access: self.access,
            registry: CustomerRegistry::new(self.verifier),
            ledger: AccountLedger::new(),
            journal: TransactionJournal::new(),
            cipher: self.cipher,
            locks: AccountLocks::new(),
        }
    }
}

/// The banking facade.
///
/// Single owner of all mutable state. Every mutating operation follows the
/// authorize / validate-and-apply / record protocol; a failure in any phase
/// leaves no partial state behind.
pub struct Bank {
    institution_name: String,
    institution_id: String,
    access: AccessControl,
    registry: CustomerRegistry,
    ledger: AccountLedger,
    journal: TransactionJournal,
    cipher: Box<dyn EncryptionProvider>,
    locks: AccountLocks,
}

impl Bank {
    /// Start building a bank with custom collaborators
    pub fn builder(
        institution_name: impl Into<String>,
        institution_id: impl Into<String>,
    ) -> BankBuilder {
        BankBuilder {
            institution_name: institution_name.into(),
            institution_id: institution_id.into(),
            verifier: Box::new(AutoApproveKyc),
            access: AccessControl::in_memory(),
            cipher: Box::new(PassthroughCipher),
        }
    }

    /// A bank wired entirely with in-process stubs
    pub fn in_memory(
        institution_name: impl Into<String>,
        institution_id: impl Into<String>,
    ) -> Self {
        Self::builder(institution_name, institution_id).build()
    }

    pub fn institution_name(&self) -> &str {
        &self.institution_name
    }

    pub fn institution_id(&self) -> &str {
        &self.institution_id
    }

    // === Role administration ===

    /// Register a principal's role and permission set.
    ///
    /// Duplicate principals are rejected, never overwritten.
    pub fn add_role(
        &self,
        principal: impl Into<String>,
        role: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Result<(), BankError> {
        Ok(self.access.add_role(principal, role, permissions)?)
    }

    /// Direct permission query, no side effects
    pub fn has_permission(&self, principal: &str, permission: Permission) -> bool {
        self.access.has_permission(principal, permission)
    }

    // === Mutating operations ===

    /// Register a customer. KYC runs before anything is stored.
    pub fn register_customer(
        &self,
        principal: &str,
        applicant: NewCustomer,
    ) -> Result<String, BankError> {
        self.authorize(principal, Permission::RegisterCustomer)?;
        let customer_id = self.registry.register(applicant)?;
        info!(principal, %customer_id, "customer registered");
        Ok(customer_id)
    }

    /// Open an account for a KYC-verified customer.
    ///
    /// A positive opening deposit is applied atomically with creation and
    /// journaled as a `deposit`.
    pub fn create_account(
        &self,
        principal: &str,
        customer_id: &str,
        account_type: AccountType,
        currency: Currency,
        initial_deposit: Amount,
    ) -> Result<String, BankError> {
        self.authorize(principal, Permission::CreateAccount)?;

        let customer = self.registry.get(customer_id)?;
        if customer.kyc_status != KycStatus::Verified {
            return Err(BankError::KycNotVerified(customer_id.to_string()));
        }

        let account_id =
            self.ledger
                .open(customer_id, account_type, currency.clone(), initial_deposit)?;
        self.registry.attach_account(customer_id, account_id.clone())?;

        if initial_deposit.is_positive() {
            self.journal.append(Transaction::record(
                account_id.clone(),
                initial_deposit,
                currency,
                TransactionKind::Deposit,
                initial_deposit,
            ));
        }

        info!(principal, customer_id, %account_id, "account opened");
        Ok(account_id)
    }

    /// Credit funds into an account.
    pub fn deposit(
        &self,
        principal: &str,
        account_id: &str,
        amount: Amount,
        currency: Currency,
    ) -> Result<Receipt, BankError> {
        self.authorize(principal, Permission::ProcessDeposit)?;

        let lock = self.locks.handle(account_id);
        let _guard = lock.lock().expect("account lock poisoned");

        let balance = self.ledger.credit(account_id, amount, &currency)?;
        let receipt = self.commit(account_id, amount, currency, TransactionKind::Deposit, balance);
        info!(principal, account_id, %amount, "deposit committed");
        Ok(receipt)
    }

    /// Debit funds out of an account.
    pub fn withdraw(
        &self,
        principal: &str,
        account_id: &str,
        amount: Amount,
        currency: Currency,
    ) -> Result<Receipt, BankError> {
        self.authorize(principal, Permission::ProcessWithdrawal)?;

        let lock = self.locks.handle(account_id);
        let _guard = lock.lock().expect("account lock poisoned");

        let balance = self.ledger.debit(account_id, amount, &currency)?;
        let receipt =
            self.commit(account_id, amount, currency, TransactionKind::Withdrawal, balance);
        info!(principal, account_id, %amount, "withdrawal committed");
        Ok(receipt)
    }

    /// Move funds between two accounts as one logical unit.
    ///
    /// Implemented as debit-then-credit. If the credit fails after the debit
    /// succeeded, a compensating credit restores the source before the error
    /// is reported, so the pair of balances is observably atomic. A failed
    /// compensation surfaces as `LedgerInconsistency`, never silently.
    pub fn transfer(
        &self,
        principal: &str,
        from: &str,
        to: &str,
        amount: Amount,
        currency: Currency,
    ) -> Result<TransferReceipt, BankError> {
        self.authorize(principal, Permission::ProcessTransfer)?;

        if from == to {
            return Err(BankError::SameAccountTransfer(from.to_string()));
        }

        // Ascending-id acquisition; opposing transfers cannot deadlock
        let (first, second) = self.locks.ordered_pair(from, to);
        let _g1 = first.lock().expect("account lock poisoned");
        let _g2 = second.lock().expect("account lock poisoned");

        let from_balance = self.ledger.debit(from, amount, &currency)?;

        let to_balance = match self.ledger.credit(to, amount, &currency) {
            Ok(balance) => balance,
            Err(credit_err) => {
                debug!(from, to, %amount, error = %credit_err, "credit failed, compensating");
                self.ledger.credit(from, amount, &currency).map_err(|comp_err| {
                    BankError::LedgerInconsistency {
                        operation: "transfer".to_string(),
                        detail: format!(
                            "debited {amount} from {from} but compensation failed: {comp_err}"
                        ),
                    }
                })?;
                return Err(credit_err.into());
            }
        };

        let outgoing = self.commit(
            from,
            amount,
            currency.clone(),
            TransactionKind::TransferOut,
            from_balance,
        );
        let incoming =
            self.commit(to, amount, currency, TransactionKind::TransferIn, to_balance);

        info!(principal, from, to, %amount, "transfer committed");
        Ok(TransferReceipt { outgoing, incoming })
    }

    // === Registry maintenance ===

    /// Apply one enumerated profile change
    pub fn update_profile(
        &self,
        customer_id: &str,
        update: ProfileUpdate,
    ) -> Result<(), BankError> {
        Ok(self.registry.update_profile(customer_id, update)?)
    }

    /// Explicit KYC status transition
    pub fn set_kyc_status(
        &self,
        customer_id: &str,
        status: KycStatus,
    ) -> Result<(), BankError> {
        Ok(self.registry.set_kyc_status(customer_id, status)?)
    }

    // === Encryption stub ===

    /// Encrypt through the injected provider (stub: identity)
    pub fn encrypt_data(&self, data: &[u8]) -> Vec<u8> {
        self.cipher.encrypt(data)
    }

    /// Decrypt through the injected provider; gated like any mutation.
    pub fn decrypt_data(&self, principal: &str, data: &[u8]) -> Result<Vec<u8>, BankError> {
        self.authorize(principal, Permission::DecryptData)?;
        Ok(self.cipher.decrypt(data))
    }

    // === Reads ===

    pub fn balance(&self, account_id: &str) -> Result<Amount, BankError> {
        Ok(self.ledger.balance(account_id)?)
    }

    pub fn customer(&self, customer_id: &str) -> Result<Customer, BankError> {
        Ok(self.registry.get(customer_id)?)
    }

    pub fn customer_summary(&self, customer_id: &str) -> Result<CustomerSummary, BankError> {
        Ok(self.registry.summary(customer_id)?)
    }

    /// Balance and history of one account as a single consistent view,
    /// taken under the account's serialization guard.
    pub fn statement(&self, account_id: &str) -> Result<AccountStatement, BankError> {
        let lock = self.locks.handle(account_id);
        let _guard = lock.lock().expect("account lock poisoned");

        let balance = self.ledger.balance(account_id)?;
        Ok(AccountStatement {
            account_id: account_id.to_string(),
            balance,
            transactions: self.journal.for_account(account_id),
        })
    }

    /// The full journal in creation order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.journal.all()
    }

    /// Sum of balances held in one currency
    pub fn total_balance(&self, currency: &Currency) -> Amount {
        self.ledger.total_balance(currency)
    }

    // === Internals ===

    fn authorize(&self, principal: &str, permission: Permission) -> Result<(), BankError> {
        if self.access.has_permission(principal, permission) {
            Ok(())
        } else {
            warn!(principal, %permission, "permission denied");
            Err(BankError::PermissionDenied {
                principal: principal.to_string(),
                permission,
            })
        }
    }

    /// Phase 3: append the journal record and build the receipt
    fn commit(
        &self,
        account_id: &str,
        amount: Amount,
        currency: Currency,
        kind: TransactionKind,
        balance_after: Amount,
    ) -> Receipt {
        let record =
            Transaction::record(account_id, amount, currency, kind, balance_after);
        let receipt = Receipt::from(&record);
        self.journal.append(record);
        receipt
    }
}
