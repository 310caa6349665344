//! Events a cardholder can trigger, and the operations they pick.

use crate::bank::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The operation a cardholder asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Take cash out of the linked account.
    Withdraw,
    /// Report the linked account's balance.
    BalanceInquiry,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Withdraw => f.write_str("withdrawal"),
            Operation::BalanceInquiry => f.write_str("balance inquiry"),
        }
    }
}

/// One input to [`Atm::dispatch`](crate::session::Atm::dispatch).
///
/// What an event does depends entirely on the current state; the transition
/// table in the machine is the single place that pairing is decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmEvent {
    /// A card enters the slot.
    InsertCard(Card),
    /// The cardholder pulls the card back out.
    RemoveCard,
    /// The cardholder picks an operation on the keypad.
    SelectOperation(Operation),
    /// The cardholder confirms, asking the machine to run the transaction.
    ExecuteTransaction,
}

impl AtmEvent {
    /// The payload-free tag of this event, for journals and diagnostics.
    pub fn kind(&self) -> EventKind {
        match self {
            AtmEvent::InsertCard(_) => EventKind::InsertCard,
            AtmEvent::RemoveCard => EventKind::RemoveCard,
            AtmEvent::SelectOperation(_) => EventKind::SelectOperation,
            AtmEvent::ExecuteTransaction => EventKind::ExecuteTransaction,
        }
    }
}

/// An [`AtmEvent`] stripped of its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    InsertCard,
    RemoveCard,
    SelectOperation,
    ExecuteTransaction,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::InsertCard => f.write_str("insert-card"),
            EventKind::RemoveCard => f.write_str("remove-card"),
            EventKind::SelectOperation => f.write_str("select-operation"),
            EventKind::ExecuteTransaction => f.write_str("execute-transaction"),
        }
    }
}
