//! What the machine tells the cardholder when an event is accepted.

use crate::cash::{CashBundle, Money};
use crate::session::event::Operation;
use std::fmt;

/// The successful outcome of one dispatched event.
///
/// Each variant corresponds to one accepted cell of the transition table.
/// `Display` renders the screen line a cardholder would see; the variant
/// itself is the value embedders should match on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AtmNotice {
    /// A card was accepted and a session began.
    CardInserted,
    /// The card came back out before anything irreversible happened.
    CardReturned,
    /// The machine is now waiting for a PIN.
    AwaitingPin,
    /// The PIN matched and the linked account was found.
    PinAccepted,
    /// The operation is locked in and ready to execute.
    OperationSelected(Operation),
    /// A withdrawal completed and these bills were handed out.
    CashDispensed(CashBundle),
    /// A balance inquiry completed with this balance.
    Balance(Money),
}

impl fmt::Display for AtmNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtmNotice::CardInserted => f.write_str("card accepted"),
            AtmNotice::CardReturned => f.write_str("card returned"),
            AtmNotice::AwaitingPin => f.write_str("enter your PIN"),
            AtmNotice::PinAccepted => f.write_str("PIN accepted"),
            AtmNotice::OperationSelected(operation) => {
                write!(f, "operation selected: {operation}")
            }
            AtmNotice::CashDispensed(bundle) => write!(f, "dispensing {bundle}"),
            AtmNotice::Balance(balance) => write!(f, "balance: {balance}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cash::Denomination;

    #[test]
    fn display_renders_screen_lines() {
        assert_eq!(format!("{}", AtmNotice::AwaitingPin), "enter your PIN");
        assert_eq!(
            format!("{}", AtmNotice::OperationSelected(Operation::Withdraw)),
            "operation selected: withdrawal"
        );
        assert_eq!(
            format!("{}", AtmNotice::Balance(Money::from_units(10_000))),
            "balance: $10000"
        );

        let bundle = CashBundle::new()
            .with(Denomination::Hundred, 1)
            .with(Denomination::Twenty, 1)
            .with(Denomination::Ten, 1);
        assert_eq!(
            format!("{}", AtmNotice::CashDispensed(bundle)),
            "dispensing 1 x $100, 1 x $20, 1 x $10"
        );
    }
}
