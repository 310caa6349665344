//! Accounts and the balances behind the cards.

use crate::cash::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque account identifier, e.g. `ACC001`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Creates an account number from any string-like value.
    pub fn new(number: impl Into<String>) -> Self {
        AccountNumber(number.into())
    }

    /// The number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountNumber {
    fn from(number: &str) -> Self {
        AccountNumber::new(number)
    }
}

impl From<String> for AccountNumber {
    fn from(number: String) -> Self {
        AccountNumber(number)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bank account with a non-negative balance.
///
/// Withdrawal is check-then-debit: the balance only changes when it covers
/// the full amount, so it can never go negative.
///
/// # Example
///
/// ```rust
/// use cashpoint::{Account, Money};
///
/// let mut account = Account::new("ACC001", Money::from_units(100));
/// assert!(account.withdraw(Money::from_units(60)));
/// assert!(!account.withdraw(Money::from_units(50)));
/// assert_eq!(account.balance(), Money::from_units(40));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    balance: Money,
}

impl Account {
    /// Creates an account with an opening balance.
    pub fn new(number: impl Into<AccountNumber>, opening_balance: Money) -> Self {
        Account {
            number: number.into(),
            balance: opening_balance,
        }
    }

    /// The account's identifier.
    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    /// The current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Debits `amount` if the balance covers it.
    ///
    /// Returns false and leaves the balance untouched when it does not. A
    /// withdrawal of the entire balance succeeds and leaves zero behind.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        match self.balance.checked_sub(amount) {
            Some(remaining) => {
                self.balance = remaining;
                true
            }
            None => false,
        }
    }

    /// Credits `amount` unconditionally.
    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
    }
}
