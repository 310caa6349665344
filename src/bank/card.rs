//! Cards and PIN checks.

use crate::bank::account::AccountNumber;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque card identifier, e.g. `CARD001`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardNumber(String);

impl CardNumber {
    /// Creates a card number from any string-like value.
    pub fn new(number: impl Into<String>) -> Self {
        CardNumber(number.into())
    }

    /// The number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardNumber {
    fn from(number: &str) -> Self {
        CardNumber::new(number)
    }
}

impl From<String> for CardNumber {
    fn from(number: String) -> Self {
        CardNumber(number)
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A numeric PIN, compared by plain equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinCode(u32);

impl PinCode {
    /// Creates a PIN from its digits.
    pub const fn new(digits: u32) -> Self {
        PinCode(digits)
    }
}

impl From<u32> for PinCode {
    fn from(digits: u32) -> Self {
        PinCode(digits)
    }
}

/// A bank card: its number, its PIN, and the account it belongs to.
///
/// # Example
///
/// ```rust
/// use cashpoint::{Card, PinCode};
///
/// let card = Card::new("CARD001", PinCode::new(1111), "ACC001");
/// assert!(card.validate_pin(PinCode::new(1111)));
/// assert!(!card.validate_pin(PinCode::new(9999)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    number: CardNumber,
    pin: PinCode,
    account: AccountNumber,
}

impl Card {
    /// Creates a card linked to an account.
    pub fn new(
        number: impl Into<CardNumber>,
        pin: PinCode,
        account: impl Into<AccountNumber>,
    ) -> Self {
        Card {
            number: number.into(),
            pin,
            account: account.into(),
        }
    }

    /// The card's identifier.
    pub fn number(&self) -> &CardNumber {
        &self.number
    }

    /// The account this card draws on.
    pub fn account_number(&self) -> &AccountNumber {
        &self.account
    }

    /// Whether `candidate` matches the card's PIN.
    pub fn validate_pin(&self, candidate: PinCode) -> bool {
        self.pin == candidate
    }
}
