//! Monetary amounts in whole currency units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// An amount of money in whole currency units.
///
/// Amounts are unsigned, so a negative balance or a negative dispense
/// request is unrepresentable. Subtraction goes through [`Money::checked_sub`]
/// and fails instead of wrapping.
///
/// # Example
///
/// ```rust
/// use cashpoint::Money;
///
/// let balance = Money::from_units(5_000);
/// let debit = Money::from_units(130);
///
/// assert_eq!(balance.checked_sub(debit), Some(Money::from_units(4_870)));
/// assert_eq!(debit.checked_sub(balance), None);
/// assert_eq!(format!("{balance}"), "$5000");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates an amount from a count of whole currency units.
    pub const fn from_units(units: u64) -> Self {
        Money(units)
    }

    /// Zero units.
    pub const fn zero() -> Self {
        Money(0)
    }

    /// The raw unit count.
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Returns true when the amount is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtracts `other`, returning `None` when it exceeds `self`.
    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Subtracts `other`, stopping at zero.
    pub const fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, count: u32) -> Money {
        Money(self.0 * u64::from(count))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
