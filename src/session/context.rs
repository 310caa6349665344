//! Per-session working data.

use crate::bank::{AccountNumber, Card};
use crate::session::event::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A unique identifier minted when a card is inserted.
///
/// Journal records carry the identifier, so every event of one visit can be
/// pulled back out of the journal later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub(crate) fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What the machine remembers about the visit in progress.
///
/// The context fills up as the session advances: the card at insertion, the
/// account number once the PIN is accepted, the operation once chosen. Every
/// route back to [`Idle`](crate::SessionState::Idle) empties it again, so an
/// idle machine never retains cardholder data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    session: Option<SessionId>,
    card: Option<Card>,
    account: Option<AccountNumber>,
    operation: Option<Operation>,
}

impl SessionContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        SessionContext::default()
    }

    /// The identifier of the session in progress, if any.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session
    }

    /// The inserted card, if any.
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// The account resolved from the card, once the PIN is accepted.
    pub fn account(&self) -> Option<&AccountNumber> {
        self.account.as_ref()
    }

    /// The chosen operation, if one has been selected.
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// True when the context holds no session data at all.
    pub fn is_empty(&self) -> bool {
        self.session.is_none()
            && self.card.is_none()
            && self.account.is_none()
            && self.operation.is_none()
    }

    /// Starts a fresh session around `card`.
    pub(crate) fn begin(&mut self, card: Card) {
        self.session = Some(SessionId::new());
        self.card = Some(card);
        self.account = None;
        self.operation = None;
    }

    pub(crate) fn set_account(&mut self, account: AccountNumber) {
        self.account = Some(account);
    }

    pub(crate) fn set_operation(&mut self, operation: Operation) {
        self.operation = Some(operation);
    }

    /// Drops everything. Safe to call on an already empty context.
    pub(crate) fn clear(&mut self) {
        *self = SessionContext::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::PinCode;

    fn card() -> Card {
        Card::new("CARD001", PinCode::new(1111), "ACC001")
    }

    #[test]
    fn new_context_is_empty() {
        assert!(SessionContext::new().is_empty());
    }

    #[test]
    fn begin_mints_a_fresh_session_id() {
        let mut first = SessionContext::new();
        let mut second = SessionContext::new();
        first.begin(card());
        second.begin(card());
        assert_ne!(first.session_id(), second.session_id());
        assert!(!first.is_empty());
        assert!(first.card().is_some());
    }

    #[test]
    fn clear_empties_everything() {
        let mut context = SessionContext::new();
        context.begin(card());
        context.set_account("ACC001".into());
        context.set_operation(Operation::Withdraw);

        context.clear();
        assert!(context.is_empty());
        assert!(context.session_id().is_none());
        assert!(context.operation().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut context = SessionContext::new();
        context.begin(card());
        context.clear();
        context.clear();
        assert!(context.is_empty());
    }

    #[test]
    fn begin_discards_stale_fields() {
        let mut context = SessionContext::new();
        context.begin(card());
        context.set_account("ACC001".into());
        context.set_operation(Operation::BalanceInquiry);

        context.begin(Card::new("CARD002", PinCode::new(2222), "ACC002"));
        assert!(context.account().is_none());
        assert!(context.operation().is_none());
        assert_eq!(context.card().unwrap().number().as_str(), "CARD002");
    }
}
