//! The cash drawer: per-denomination stock and greedy dispensing.

use crate::cash::bundle::CashBundle;
use crate::cash::denomination::Denomination;
use crate::cash::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-denomination bill stock for one machine.
///
/// Dispensing is greedy: the drawer walks denominations largest first and
/// takes as many bills of each as the remaining amount allows. The plan is
/// computed against a snapshot of the stock and committed only when it covers
/// the full amount, so a failed dispense never changes the drawer.
///
/// # Example
///
/// ```rust
/// use cashpoint::{CashInventory, Denomination, Money};
///
/// let mut drawer = CashInventory::default();
/// let bundle = drawer.dispense(Money::from_units(280)).unwrap();
///
/// assert_eq!(bundle.count_of(Denomination::Hundred), 2);
/// assert_eq!(bundle.count_of(Denomination::Fifty), 1);
/// assert_eq!(bundle.count_of(Denomination::Twenty), 1);
/// assert_eq!(bundle.count_of(Denomination::Ten), 1);
/// assert_eq!(bundle.total(), Money::from_units(280));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashInventory {
    stock: BTreeMap<Denomination, u32>,
}

impl CashInventory {
    /// Creates a drawer with no bills at all.
    pub fn empty() -> Self {
        CashInventory {
            stock: BTreeMap::new(),
        }
    }

    /// Adds bills and returns the drawer, for fluent construction.
    ///
    /// ```rust
    /// use cashpoint::{CashInventory, Denomination, Money};
    ///
    /// let drawer = CashInventory::empty()
    ///     .with_bills(Denomination::Hundred, 1)
    ///     .with_bills(Denomination::Fifty, 1);
    /// assert_eq!(drawer.total_value(), Money::from_units(150));
    /// ```
    pub fn with_bills(mut self, denomination: Denomination, count: u32) -> Self {
        self.load(denomination, count);
        self
    }

    /// Loads `count` additional bills of `denomination` into the drawer.
    pub fn load(&mut self, denomination: Denomination, count: u32) {
        if count > 0 {
            *self.stock.entry(denomination).or_insert(0) += count;
        }
    }

    /// The number of bills of `denomination` currently stocked.
    pub fn count_of(&self, denomination: Denomination) -> u32 {
        self.stock.get(&denomination).copied().unwrap_or(0)
    }

    /// The combined face value of every bill in the drawer.
    pub fn total_value(&self) -> Money {
        self.stock
            .iter()
            .map(|(denomination, count)| denomination.value() * *count)
            .sum()
    }

    /// Whether the drawer's total value covers `amount`.
    ///
    /// This compares total value only. It does not ask whether the amount is
    /// reachable with the bills on hand, so it can say yes for an amount that
    /// [`CashInventory::dispense`] later refuses. Callers treat it as a cheap
    /// pre-check and rely on `dispense` for the real answer.
    pub fn has_sufficient_cash(&self, amount: Money) -> bool {
        self.total_value() >= amount
    }

    /// Dispenses exactly `amount`, largest bills first.
    ///
    /// Returns the bundle of removed bills, or `None` when the exact amount
    /// cannot be composed from the current stock. On `None` the drawer is
    /// left exactly as it was, including a request for zero.
    pub fn dispense(&mut self, amount: Money) -> Option<CashBundle> {
        if amount.is_zero() {
            return None;
        }

        let mut remaining = amount.units();
        let mut plan = CashBundle::new();
        for denomination in Denomination::DESCENDING {
            let face = denomination.value().units();
            let wanted = remaining / face;
            let take = wanted.min(u64::from(self.count_of(denomination)));
            if take > 0 {
                plan.add(denomination, take as u32);
                remaining -= take * face;
            }
        }

        if remaining > 0 {
            return None;
        }

        for (denomination, count) in plan.bills() {
            if let Some(stocked) = self.stock.get_mut(&denomination) {
                *stocked -= count;
            }
        }
        Some(plan)
    }
}

/// The drawer loadout a machine starts with.
impl Default for CashInventory {
    fn default() -> Self {
        CashInventory::empty()
            .with_bills(Denomination::Hundred, 10)
            .with_bills(Denomination::Fifty, 10)
            .with_bills(Denomination::Twenty, 20)
            .with_bills(Denomination::Ten, 30)
            .with_bills(Denomination::Five, 20)
            .with_bills(Denomination::One, 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loadout_counts_and_total() {
        let drawer = CashInventory::default();
        assert_eq!(drawer.count_of(Denomination::Hundred), 10);
        assert_eq!(drawer.count_of(Denomination::Fifty), 10);
        assert_eq!(drawer.count_of(Denomination::Twenty), 20);
        assert_eq!(drawer.count_of(Denomination::Ten), 30);
        assert_eq!(drawer.count_of(Denomination::Five), 20);
        assert_eq!(drawer.count_of(Denomination::One), 50);
        assert_eq!(drawer.total_value(), Money::from_units(2_350));
    }

    #[test]
    fn load_accumulates_bills() {
        let mut drawer = CashInventory::empty();
        drawer.load(Denomination::Twenty, 3);
        drawer.load(Denomination::Twenty, 2);
        assert_eq!(drawer.count_of(Denomination::Twenty), 5);
        assert_eq!(drawer.total_value(), Money::from_units(100));
    }

    #[test]
    fn sufficiency_compares_total_value_only() {
        let drawer = CashInventory::empty()
            .with_bills(Denomination::Hundred, 1)
            .with_bills(Denomination::Fifty, 1);
        assert!(drawer.has_sufficient_cash(Money::from_units(150)));
        assert!(drawer.has_sufficient_cash(Money::from_units(130)));
        assert!(!drawer.has_sufficient_cash(Money::from_units(151)));
    }

    #[test]
    fn dispense_prefers_largest_bills() {
        let mut drawer = CashInventory::default();
        let bundle = drawer.dispense(Money::from_units(280)).unwrap();
        assert_eq!(bundle.count_of(Denomination::Hundred), 2);
        assert_eq!(bundle.count_of(Denomination::Fifty), 1);
        assert_eq!(bundle.count_of(Denomination::Twenty), 1);
        assert_eq!(bundle.count_of(Denomination::Ten), 1);
        assert_eq!(bundle.total(), Money::from_units(280));
    }

    #[test]
    fn dispense_removes_exactly_the_bundle() {
        let mut drawer = CashInventory::default();
        let before = drawer.total_value();
        let bundle = drawer.dispense(Money::from_units(365)).unwrap();
        assert_eq!(bundle.total(), Money::from_units(365));
        assert_eq!(drawer.total_value() + bundle.total(), before);
    }

    #[test]
    fn greedy_falls_through_to_smaller_bills() {
        let mut drawer = CashInventory::empty()
            .with_bills(Denomination::Fifty, 1)
            .with_bills(Denomination::Twenty, 4);
        let bundle = drawer.dispense(Money::from_units(90)).unwrap();
        assert_eq!(bundle.count_of(Denomination::Fifty), 1);
        assert_eq!(bundle.count_of(Denomination::Twenty), 2);
        assert_eq!(drawer.count_of(Denomination::Twenty), 2);
    }

    #[test]
    fn unreachable_amount_leaves_stock_untouched() {
        let mut drawer = CashInventory::empty()
            .with_bills(Denomination::Hundred, 1)
            .with_bills(Denomination::Fifty, 1);
        let before = drawer.clone();

        // Total value covers 130, but no combination of a $100 and a $50
        // composes it.
        assert!(drawer.has_sufficient_cash(Money::from_units(130)));
        assert_eq!(drawer.dispense(Money::from_units(130)), None);
        assert_eq!(drawer, before);
    }

    #[test]
    fn greedy_misses_reachable_amounts_it_overcommits_on() {
        // 60 is composable as 20 x 3, but greedy takes the $50 first and
        // then cannot finish the remaining 10.
        let mut drawer = CashInventory::empty()
            .with_bills(Denomination::Fifty, 1)
            .with_bills(Denomination::Twenty, 3);
        let before = drawer.clone();
        assert_eq!(drawer.dispense(Money::from_units(60)), None);
        assert_eq!(drawer, before);
    }

    #[test]
    fn dispense_zero_is_refused() {
        let mut drawer = CashInventory::default();
        let before = drawer.clone();
        assert_eq!(drawer.dispense(Money::zero()), None);
        assert_eq!(drawer, before);
    }

    #[test]
    fn drawer_can_be_drained_to_empty() {
        let mut drawer = CashInventory::empty().with_bills(Denomination::Hundred, 1);
        let bundle = drawer.dispense(Money::from_units(100)).unwrap();
        assert_eq!(bundle.total(), Money::from_units(100));
        assert_eq!(drawer.total_value(), Money::zero());
        assert!(!drawer.has_sufficient_cash(Money::from_units(1)));
    }

    #[test]
    fn serialization_round_trip() {
        let drawer = CashInventory::default();
        let json = serde_json::to_string(&drawer).unwrap();
        let restored: CashInventory = serde_json::from_str(&json).unwrap();
        assert_eq!(drawer, restored);
    }
}
