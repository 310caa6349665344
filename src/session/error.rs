//! Why a dispatched event was rejected.

use crate::bank::AccountNumber;
use crate::cash::Money;
use crate::session::event::EventKind;
use crate::session::state::SessionState;
use thiserror::Error;

/// The failed outcome of one dispatched event.
///
/// Retryable rejections (wrong PIN, short balance, short drawer, an amount
/// the bills cannot compose) leave the session where it was. Terminal ones
/// (cancellation, a card whose account does not exist) eject the card and
/// return the machine to idle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtmError {
    /// The PIN did not match the card. The session stays in PIN validation.
    #[error("invalid PIN")]
    InvalidPin,

    /// The card points at an account the bank does not know.
    #[error("account {number} not found")]
    AccountNotFound { number: AccountNumber },

    /// The account balance does not cover the requested amount.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Money, available: Money },

    /// The drawer's total value does not cover the requested amount.
    #[error("machine cannot cover {requested}: {available} in the drawer")]
    InsufficientInventory { requested: Money, available: Money },

    /// The drawer's bills cannot compose the exact amount. Any debit made
    /// for the attempt has been reversed.
    #[error("cannot compose {amount} from the bills on hand")]
    UnreachableDenomination { amount: Money },

    /// Withdrawal amounts must be positive.
    #[error("withdrawal amount must be positive")]
    InvalidAmount,

    /// The cardholder pulled the card mid-session.
    #[error("session cancelled, card returned")]
    SessionCancelled,

    /// The event has no accepted cell in the current state's row.
    #[error("{event} is not allowed in {state} state")]
    InvalidTransition {
        state: SessionState,
        event: EventKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_their_context() {
        let error = AtmError::InsufficientBalance {
            requested: Money::from_units(200),
            available: Money::from_units(100),
        };
        assert_eq!(
            error.to_string(),
            "insufficient balance: requested $200, available $100"
        );

        let error = AtmError::InvalidTransition {
            state: SessionState::HasCard,
            event: EventKind::ExecuteTransaction,
        };
        assert_eq!(
            error.to_string(),
            "execute-transaction is not allowed in HasCard state"
        );
    }
}
