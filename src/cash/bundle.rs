//! A counted set of bills, as handed out by the drawer.

use crate::cash::denomination::Denomination;
use crate::cash::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A bundle of bills keyed by denomination.
///
/// This is what a successful dispense hands back: the exact breakdown of the
/// requested amount. Bundles are plain values and never reference the drawer
/// they came from.
///
/// # Example
///
/// ```rust
/// use cashpoint::{CashBundle, Denomination, Money};
///
/// let bundle = CashBundle::new()
///     .with(Denomination::Hundred, 1)
///     .with(Denomination::Twenty, 2);
///
/// assert_eq!(bundle.total(), Money::from_units(140));
/// assert_eq!(bundle.count_of(Denomination::Twenty), 2);
/// assert_eq!(format!("{bundle}"), "1 x $100, 2 x $20");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBundle {
    bills: BTreeMap<Denomination, u32>,
}

impl CashBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        CashBundle::default()
    }

    /// Adds bills and returns the bundle, for fluent construction.
    pub fn with(mut self, denomination: Denomination, count: u32) -> Self {
        self.add(denomination, count);
        self
    }

    /// Adds `count` bills of `denomination` to the bundle.
    pub fn add(&mut self, denomination: Denomination, count: u32) {
        if count > 0 {
            *self.bills.entry(denomination).or_insert(0) += count;
        }
    }

    /// The number of bills of `denomination` in the bundle.
    pub fn count_of(&self, denomination: Denomination) -> u32 {
        self.bills.get(&denomination).copied().unwrap_or(0)
    }

    /// The combined face value of every bill in the bundle.
    pub fn total(&self) -> Money {
        self.bills
            .iter()
            .map(|(denomination, count)| denomination.value() * *count)
            .sum()
    }

    /// The number of physical bills in the bundle.
    pub fn bill_count(&self) -> u32 {
        self.bills.values().sum()
    }

    /// Returns true when the bundle holds no bills.
    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// Iterates over `(denomination, count)` pairs, smallest face value first.
    pub fn bills(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.bills.iter().map(|(denomination, count)| (*denomination, *count))
    }
}

impl fmt::Display for CashBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no bills");
        }
        let mut first = true;
        for denomination in Denomination::DESCENDING {
            let count = self.count_of(denomination);
            if count == 0 {
                continue;
            }
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{count} x {denomination}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bundle_is_empty() {
        let bundle = CashBundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.total(), Money::zero());
        assert_eq!(bundle.bill_count(), 0);
    }

    #[test]
    fn add_merges_counts() {
        let mut bundle = CashBundle::new();
        bundle.add(Denomination::Ten, 2);
        bundle.add(Denomination::Ten, 3);
        assert_eq!(bundle.count_of(Denomination::Ten), 5);
        assert_eq!(bundle.total(), Money::from_units(50));
    }

    #[test]
    fn adding_zero_bills_changes_nothing() {
        let mut bundle = CashBundle::new();
        bundle.add(Denomination::Fifty, 0);
        assert!(bundle.is_empty());
    }

    #[test]
    fn total_sums_face_values() {
        let bundle = CashBundle::new()
            .with(Denomination::Hundred, 2)
            .with(Denomination::Fifty, 1)
            .with(Denomination::One, 4);
        assert_eq!(bundle.total(), Money::from_units(254));
        assert_eq!(bundle.bill_count(), 7);
    }

    #[test]
    fn display_lists_largest_first() {
        let bundle = CashBundle::new()
            .with(Denomination::Five, 1)
            .with(Denomination::Hundred, 1)
            .with(Denomination::Twenty, 3);
        assert_eq!(format!("{bundle}"), "1 x $100, 3 x $20, 1 x $5");
    }

    #[test]
    fn display_of_empty_bundle() {
        assert_eq!(format!("{}", CashBundle::new()), "no bills");
    }
}
