//! AccountLedger - Balance primitives with validation
//!
//! credit/debit are the only mutators. Both validate existence, currency,
//! and amount positivity; debit additionally refuses to cross zero. The
//! account is inserted with its opening deposit already applied, so no
//! observer ever sees a freshly opened account in an inconsistent state.

use crate::account::{Account, AccountType};
use crate::error::LedgerError;
use corebank_core::{Amount, Currency, IdSequence};
use std::collections::HashMap;
use std::sync::RwLock;

/// Account store keyed by id.
pub struct AccountLedger {
    accounts: RwLock<HashMap<String, Account>>,
    ids: IdSequence,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            ids: IdSequence::new("ACC"),
        }
    }

    /// Open an account with an optional opening deposit.
    ///
    /// The deposit lands atomically with the insert; callers that want a
    /// journal record for it append one after this returns.
    pub fn open(
        &self,
        customer_id: impl Into<String>,
        account_type: AccountType,
        currency: Currency,
        opening_deposit: Amount,
    ) -> Result<String, LedgerError> {
        let id = self.ids.next();
        let account = Account::new(
            id.clone(),
            customer_id.into(),
            account_type,
            currency,
            opening_deposit,
        );
        self.accounts
            .write()
            .expect("ledger lock poisoned")
            .insert(id.clone(), account);
        Ok(id)
    }

    /// Increase a balance. Returns the new balance.
    pub fn credit(
        &self,
        account_id: &str,
        amount: Amount,
        currency: &Currency,
    ) -> Result<Amount, LedgerError> {
        require_positive(&amount)?;
        let mut accounts = self.accounts.write().expect("ledger lock poisoned");
        let account = lookup_mut(&mut accounts, account_id)?;
        check_currency(account, currency)?;

        account.balance = account
            .balance
            .checked_add(&amount)
            .ok_or_else(|| LedgerError::InvalidAmount(format!("credit overflow: {amount}")))?;
        Ok(account.balance)
    }

    /// Decrease a balance. Returns the new balance.
    ///
    /// Never lets the balance go negative: a debit larger than the balance
    /// fails with `InsufficientFunds` and changes nothing.
    pub fn debit(
        &self,
        account_id: &str,
        amount: Amount,
        currency: &Currency,
    ) -> Result<Amount, LedgerError> {
        require_positive(&amount)?;
        let mut accounts = self.accounts.write().expect("ledger lock poisoned");
        let account = lookup_mut(&mut accounts, account_id)?;
        check_currency(account, currency)?;

        account.balance = account.balance.checked_sub(&amount).ok_or_else(|| {
            LedgerError::InsufficientFunds {
                account_id: account_id.to_string(),
                requested: amount.value(),
                available: account.balance.value(),
            }
        })?;
        Ok(account.balance)
    }

    /// Current balance, read-only
    pub fn balance(&self, account_id: &str) -> Result<Amount, LedgerError> {
        Ok(self.get(account_id)?.balance)
    }

    /// Snapshot of an account
    pub fn get(&self, account_id: &str) -> Result<Account, LedgerError> {
        self.accounts
            .read()
            .expect("ledger lock poisoned")
            .get(account_id)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
    }

    /// Sum of all balances held in one currency. Diagnostic read used by
    /// conservation checks.
    pub fn total_balance(&self, currency: &Currency) -> Amount {
        self.accounts
            .read()
            .expect("ledger lock poisoned")
            .values()
            .filter(|account| &account.currency == currency)
            .fold(Amount::ZERO, |total, account| {
                total.checked_add(&account.balance).unwrap_or(total)
            })
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn require_positive(amount: &Amount) -> Result<(), LedgerError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(format!(
            "amount must be positive: {amount}"
        )))
    }
}

fn lookup_mut<'a>(
    accounts: &'a mut HashMap<String, Account>,
    account_id: &str,
) -> Result<&'a mut Account, LedgerError> {
    accounts
        .get_mut(account_id)
        .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
}

fn check_currency(account: &Account, currency: &Currency) -> Result<(), LedgerError> {
    if &account.currency == currency {
        Ok(())
    } else {
        Err(LedgerError::CurrencyMismatch {
            account_id: account.id.clone(),
            expected: account.currency.code().to_string(),
            actual: currency.code().to_string(),
        })
    }
}
