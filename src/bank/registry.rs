//! Account lookup behind a trait, so the machine never owns the bank.

use crate::bank::account::{Account, AccountNumber};
use std::collections::HashMap;

/// Resolves account numbers to accounts.
///
/// The session machine receives a registry with each event instead of
/// holding accounts itself, which keeps the machine a pure coordinator and
/// lets tests swap in whatever book of accounts they need.
pub trait AccountRegistry {
    /// Looks up an account for reading.
    fn lookup(&self, number: &AccountNumber) -> Option<&Account>;

    /// Looks up an account for debit or credit.
    fn lookup_mut(&mut self, number: &AccountNumber) -> Option<&mut Account>;
}

/// A registry backed by a plain in-memory map.
///
/// # Example
///
/// ```rust
/// use cashpoint::{Account, AccountRegistry, InMemoryAccounts, Money};
///
/// let accounts = InMemoryAccounts::new()
///     .with_account(Account::new("ACC001", Money::from_units(5_000)));
///
/// let found = accounts.lookup(&"ACC001".into()).unwrap();
/// assert_eq!(found.balance(), Money::from_units(5_000));
/// assert!(accounts.lookup(&"ACC999".into()).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryAccounts {
    accounts: HashMap<AccountNumber, Account>,
}

impl InMemoryAccounts {
    /// Creates an empty registry.
    pub fn new() -> Self {
        InMemoryAccounts::default()
    }

    /// Adds an account and returns the registry, for fluent construction.
    pub fn with_account(mut self, account: Account) -> Self {
        self.insert(account);
        self
    }

    /// Adds an account, replacing any existing entry with the same number.
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.number().clone(), account);
    }
}

impl AccountRegistry for InMemoryAccounts {
    fn lookup(&self, number: &AccountNumber) -> Option<&Account> {
        self.accounts.get(number)
    }

    fn lookup_mut(&mut self, number: &AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }
}
