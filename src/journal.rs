//! A machine-lifetime record of every dispatched event.
//!
//! The journal is append-only and survives across sessions: records carry
//! the session identifier they belonged to, so one visit can be filtered
//! back out. Recording is a pure operation that returns the extended
//! journal and leaves the original untouched.

use crate::session::{AtmError, AtmNotice, EventKind, SessionId, SessionState};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The classification of a dispatch outcome, with payloads stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    CardInserted,
    CardReturned,
    AwaitingPin,
    PinAccepted,
    OperationSelected,
    CashDispensed,
    BalanceReported,
    InvalidPin,
    AccountNotFound,
    InsufficientBalance,
    InsufficientInventory,
    UnreachableDenomination,
    InvalidAmount,
    SessionCancelled,
    InvalidTransition,
}

impl OutcomeKind {
    /// Classifies the outcome of a dispatch.
    pub fn of(outcome: &Result<AtmNotice, AtmError>) -> Self {
        match outcome {
            Ok(AtmNotice::CardInserted) => OutcomeKind::CardInserted,
            Ok(AtmNotice::CardReturned) => OutcomeKind::CardReturned,
            Ok(AtmNotice::AwaitingPin) => OutcomeKind::AwaitingPin,
            Ok(AtmNotice::PinAccepted) => OutcomeKind::PinAccepted,
            Ok(AtmNotice::OperationSelected(_)) => OutcomeKind::OperationSelected,
            Ok(AtmNotice::CashDispensed(_)) => OutcomeKind::CashDispensed,
            Ok(AtmNotice::Balance(_)) => OutcomeKind::BalanceReported,
            Err(AtmError::InvalidPin) => OutcomeKind::InvalidPin,
            Err(AtmError::AccountNotFound { .. }) => OutcomeKind::AccountNotFound,
            Err(AtmError::InsufficientBalance { .. }) => OutcomeKind::InsufficientBalance,
            Err(AtmError::InsufficientInventory { .. }) => OutcomeKind::InsufficientInventory,
            Err(AtmError::UnreachableDenomination { .. }) => OutcomeKind::UnreachableDenomination,
            Err(AtmError::InvalidAmount) => OutcomeKind::InvalidAmount,
            Err(AtmError::SessionCancelled) => OutcomeKind::SessionCancelled,
            Err(AtmError::InvalidTransition { .. }) => OutcomeKind::InvalidTransition,
        }
    }

    /// True when the outcome was a rejection.
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            OutcomeKind::InvalidPin
                | OutcomeKind::AccountNotFound
                | OutcomeKind::InsufficientBalance
                | OutcomeKind::InsufficientInventory
                | OutcomeKind::UnreachableDenomination
                | OutcomeKind::InvalidAmount
                | OutcomeKind::SessionCancelled
                | OutcomeKind::InvalidTransition
        )
    }
}

/// One dispatched event: where the session stood, where it went, and how
/// the event was answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// The session the event belonged to. `None` for events rejected while
    /// no card was inside.
    pub session: Option<SessionId>,
    /// The state the event arrived in.
    pub from: SessionState,
    /// The state the machine was left in.
    pub to: SessionState,
    /// Which event was dispatched.
    pub event: EventKind,
    /// How the event was answered.
    pub outcome: OutcomeKind,
    /// When the event was dispatched.
    pub at: DateTime<Utc>,
}

/// The append-only journal itself.
///
/// # Example
///
/// ```rust
/// use cashpoint::SessionJournal;
///
/// let journal = SessionJournal::new();
/// assert!(journal.is_empty());
/// assert!(journal.state_path().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionJournal {
    records: Vec<JournalRecord>,
}

impl SessionJournal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        SessionJournal::default()
    }

    /// Returns a new journal with `record` appended. The original journal
    /// is not modified.
    pub fn record(&self, record: JournalRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        SessionJournal { records }
    }

    /// Every record, oldest first.
    pub fn records(&self) -> &[JournalRecord] {
        &self.records
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sequence of states the machine has been through: the first
    /// record's origin followed by every record's destination. Rejected
    /// events that left the state unchanged still contribute a hop.
    pub fn state_path(&self) -> Vec<SessionState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// The records belonging to one session, oldest first.
    pub fn session_records(&self, session: SessionId) -> impl Iterator<Item = &JournalRecord> {
        self.records
            .iter()
            .filter(move |record| record.session == Some(session))
    }

    /// The time between the first and last record, if at least two exist.
    pub fn span(&self) -> Option<Duration> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) if self.records.len() > 1 => {
                Some(last.at - first.at)
            }
            _ => None,
        }
    }

    /// Serializes the journal as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: SessionState, to: SessionState, outcome: OutcomeKind) -> JournalRecord {
        JournalRecord {
            session: None,
            from,
            to,
            event: EventKind::InsertCard,
            outcome,
            at: Utc::now(),
        }
    }

    #[test]
    fn record_returns_a_new_journal() {
        let journal = SessionJournal::new();
        let extended = journal.record(record(
            SessionState::Idle,
            SessionState::HasCard,
            OutcomeKind::CardInserted,
        ));

        assert!(journal.is_empty());
        assert_eq!(extended.len(), 1);
    }

    #[test]
    fn state_path_threads_from_and_to() {
        let journal = SessionJournal::new()
            .record(record(
                SessionState::Idle,
                SessionState::HasCard,
                OutcomeKind::CardInserted,
            ))
            .record(record(
                SessionState::HasCard,
                SessionState::PinValidation,
                OutcomeKind::AwaitingPin,
            ))
            .record(record(
                SessionState::PinValidation,
                SessionState::PinValidation,
                OutcomeKind::InvalidPin,
            ));

        assert_eq!(
            journal.state_path(),
            vec![
                SessionState::Idle,
                SessionState::HasCard,
                SessionState::PinValidation,
                SessionState::PinValidation,
            ]
        );
    }

    #[test]
    fn outcome_classification_covers_both_sides() {
        assert_eq!(
            OutcomeKind::of(&Ok(AtmNotice::CardInserted)),
            OutcomeKind::CardInserted
        );
        assert_eq!(
            OutcomeKind::of(&Err(AtmError::InvalidPin)),
            OutcomeKind::InvalidPin
        );
        assert!(OutcomeKind::InvalidPin.is_rejection());
        assert!(!OutcomeKind::CashDispensed.is_rejection());
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let journal = SessionJournal::new().record(record(
            SessionState::Idle,
            SessionState::HasCard,
            OutcomeKind::CardInserted,
        ));

        let json = journal.to_json().unwrap();
        let restored: SessionJournal = serde_json::from_str(&json).unwrap();
        assert_eq!(journal, restored);
    }

    #[test]
    fn span_needs_two_records() {
        let journal = SessionJournal::new();
        assert!(journal.span().is_none());

        let one = journal.record(record(
            SessionState::Idle,
            SessionState::Idle,
            OutcomeKind::InvalidTransition,
        ));
        assert!(one.span().is_none());

        let two = one.record(record(
            SessionState::Idle,
            SessionState::HasCard,
            OutcomeKind::CardInserted,
        ));
        assert!(two.span().is_some());
    }
}
