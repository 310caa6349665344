//! Bill denominations accepted by the cash drawer.

use crate::cash::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bill denomination.
///
/// Variants are declared smallest first so the derived ordering agrees with
/// face value. Iteration for dispensing uses [`Denomination::DESCENDING`],
/// which is the greedy planning order.
///
/// # Example
///
/// ```rust
/// use cashpoint::{Denomination, Money};
///
/// assert_eq!(Denomination::Twenty.value(), Money::from_units(20));
/// assert!(Denomination::Hundred > Denomination::Five);
/// assert_eq!(Denomination::DESCENDING[0], Denomination::Hundred);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Denomination {
    One = 1,
    Five = 5,
    Ten = 10,
    Twenty = 20,
    Fifty = 50,
    Hundred = 100,
}

impl Denomination {
    /// All denominations, largest face value first.
    pub const DESCENDING: [Denomination; 6] = [
        Denomination::Hundred,
        Denomination::Fifty,
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
    ];

    /// The face value of one bill of this denomination.
    pub const fn value(self) -> Money {
        Money::from_units(self as u64)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", *self as u64)
    }
}
