//! The five states an ATM session moves through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session currently stands.
///
/// A session starts and ends in [`SessionState::Idle`]. Every other state
/// implies a card is inside the machine. The full lifecycle is
/// `Idle -> HasCard -> PinValidation -> SelectOperation -> Transaction`,
/// with every terminal outcome routing back to `Idle`.
///
/// # Example
///
/// ```rust
/// use cashpoint::SessionState;
///
/// let state = SessionState::default();
/// assert_eq!(state, SessionState::Idle);
/// assert_eq!(state.name(), "Idle");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No card in the machine.
    #[default]
    Idle,
    /// A card is inserted, PIN entry has not started.
    HasCard,
    /// Waiting for a correct PIN.
    PinValidation,
    /// PIN accepted, waiting for the operation choice.
    SelectOperation,
    /// Operation chosen, ready to execute.
    Transaction,
}

impl SessionState {
    /// A stable human-readable name for logs and journals.
    pub const fn name(self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::HasCard => "HasCard",
            SessionState::PinValidation => "PinValidation",
            SessionState::SelectOperation => "SelectOperation",
            SessionState::Transaction => "Transaction",
        }
    }

    /// Whether a card is inside the machine in this state.
    pub const fn holds_card(self) -> bool {
        !matches!(self, SessionState::Idle)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(SessionState::Idle.name(), "Idle");
        assert_eq!(SessionState::HasCard.name(), "HasCard");
        assert_eq!(SessionState::PinValidation.name(), "PinValidation");
        assert_eq!(SessionState::SelectOperation.name(), "SelectOperation");
        assert_eq!(SessionState::Transaction.name(), "Transaction");
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn every_non_idle_state_holds_a_card() {
        assert!(!SessionState::Idle.holds_card());
        assert!(SessionState::HasCard.holds_card());
        assert!(SessionState::PinValidation.holds_card());
        assert!(SessionState::SelectOperation.holds_card());
        assert!(SessionState::Transaction.holds_card());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(format!("{}", SessionState::SelectOperation), "SelectOperation");
    }
}
