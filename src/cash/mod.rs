//! Cash handling: amounts, denominations, bundles, and the drawer.
//!
//! Everything in this module is a plain value with no knowledge of sessions
//! or accounts. The drawer mutates only through [`CashInventory::dispense`]
//! and [`CashInventory::load`], and a failed dispense is a no-op.

mod bundle;
mod denomination;
mod inventory;
mod money;

pub use bundle::CashBundle;
pub use denomination::Denomination;
pub use inventory::CashInventory;
pub use money::Money;
