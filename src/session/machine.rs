//! The session machine: one transition table, one money path.

use crate::bank::Card;
use crate::cash::CashInventory;
use crate::journal::{JournalRecord, OutcomeKind, SessionJournal};
use crate::session::context::SessionContext;
use crate::session::environment::AtmEnvironment;
use crate::session::error::AtmError;
use crate::session::event::{AtmEvent, EventKind, Operation};
use crate::session::notice::AtmNotice;
use crate::session::state::SessionState;
use chrono::Utc;
use tracing::{debug, info, warn};

/// A single ATM: session state, session context, cash drawer, and journal.
///
/// The machine is driven one event at a time through [`Atm::dispatch`]. It
/// owns no accounts and no keypad; both arrive in the
/// [`AtmEnvironment`] passed with each event.
///
/// # Example
///
/// ```rust
/// use cashpoint::{
///     Account, Atm, AtmEnvironment, AtmEvent, Card, CashInventory,
///     InMemoryAccounts, Money, PinCode, QueuedInput, SessionState,
/// };
///
/// let mut atm = Atm::new(CashInventory::default());
/// let mut env = AtmEnvironment::new(
///     InMemoryAccounts::new()
///         .with_account(Account::new("ACC001", Money::from_units(5_000))),
///     QueuedInput::new(),
/// );
///
/// let card = Card::new("CARD001", PinCode::new(1111), "ACC001");
/// atm.dispatch(AtmEvent::InsertCard(card), &mut env).unwrap();
/// assert_eq!(atm.state(), SessionState::HasCard);
///
/// atm.dispatch(AtmEvent::RemoveCard, &mut env).unwrap();
/// assert_eq!(atm.state(), SessionState::Idle);
/// assert!(atm.context().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Atm {
    state: SessionState,
    context: SessionContext,
    inventory: CashInventory,
    journal: SessionJournal,
}

impl Atm {
    /// Creates an idle machine around a cash drawer.
    pub fn new(inventory: CashInventory) -> Self {
        Atm {
            state: SessionState::Idle,
            context: SessionContext::new(),
            inventory,
            journal: SessionJournal::new(),
        }
    }

    /// The current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The working data of the session in progress.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The cash drawer.
    pub fn inventory(&self) -> &CashInventory {
        &self.inventory
    }

    /// The journal of every event this machine has seen.
    pub fn journal(&self) -> &SessionJournal {
        &self.journal
    }

    /// Dispatches one event against the current state.
    ///
    /// The pairing of state and event decides everything:
    ///
    /// | state            | insert card | remove card     | select operation | execute        |
    /// |------------------|-------------|-----------------|------------------|----------------|
    /// | `Idle`           | accepted    | rejected        | rejected         | rejected       |
    /// | `HasCard`        | rejected    | card returned   | to PIN entry     | rejected, eject|
    /// | `PinValidation`  | rejected    | card returned   | PIN check        | rejected       |
    /// | `SelectOperation`| rejected    | cancels session | to `Transaction` | rejected       |
    /// | `Transaction`    | rejected    | cancels session | rejected         | runs operation |
    ///
    /// An `Err` is a rejection, not a fault: retryable rejections (wrong
    /// PIN, short balance, short drawer, uncomposable amount) leave the
    /// session exactly where it was, while terminal ones (cancellation,
    /// unknown account, execution straight from `HasCard`) eject the card,
    /// clear the context, and return the machine to idle. Every dispatch,
    /// accepted or not, appends one record to the journal.
    pub fn dispatch(
        &mut self,
        event: AtmEvent,
        env: &mut AtmEnvironment,
    ) -> Result<AtmNotice, AtmError> {
        let from = self.state;
        let kind = event.kind();
        let session_before = self.context.session_id();

        let outcome = match event {
            AtmEvent::InsertCard(card) => self.handle_insert_card(card),
            AtmEvent::RemoveCard => self.handle_remove_card(),
            AtmEvent::SelectOperation(operation) => self.handle_select_operation(operation, env),
            AtmEvent::ExecuteTransaction => self.handle_execute_transaction(env),
        };

        // A terminal outcome clears the context, so fall back to the id the
        // session had when the event arrived.
        let session = self.context.session_id().or(session_before);
        self.journal = self.journal.record(JournalRecord {
            session,
            from,
            to: self.state,
            event: kind,
            outcome: OutcomeKind::of(&outcome),
            at: Utc::now(),
        });

        match &outcome {
            Ok(notice @ AtmNotice::CashDispensed(_)) => {
                info!(from = %from, to = %self.state, %notice, "event accepted");
            }
            Ok(notice) => {
                debug!(from = %from, to = %self.state, %notice, "event accepted");
            }
            Err(error) => {
                warn!(from = %from, to = %self.state, %error, "event rejected");
            }
        }

        outcome
    }

    fn handle_insert_card(&mut self, card: Card) -> Result<AtmNotice, AtmError> {
        match self.state {
            SessionState::Idle => {
                self.context.begin(card);
                self.state = SessionState::HasCard;
                Ok(AtmNotice::CardInserted)
            }
            state => Err(AtmError::InvalidTransition {
                state,
                event: EventKind::InsertCard,
            }),
        }
    }

    fn handle_remove_card(&mut self) -> Result<AtmNotice, AtmError> {
        match self.state {
            SessionState::Idle => Err(AtmError::InvalidTransition {
                state: SessionState::Idle,
                event: EventKind::RemoveCard,
            }),
            SessionState::HasCard | SessionState::PinValidation => {
                self.end_session();
                Ok(AtmNotice::CardReturned)
            }
            SessionState::SelectOperation | SessionState::Transaction => {
                self.end_session();
                Err(AtmError::SessionCancelled)
            }
        }
    }

    fn handle_select_operation(
        &mut self,
        operation: Operation,
        env: &mut AtmEnvironment,
    ) -> Result<AtmNotice, AtmError> {
        match self.state {
            SessionState::Idle => Err(AtmError::InvalidTransition {
                state: SessionState::Idle,
                event: EventKind::SelectOperation,
            }),
            SessionState::HasCard => {
                // The operation payload is not kept here; the cardholder
                // supplies it again once the PIN clears.
                self.state = SessionState::PinValidation;
                Ok(AtmNotice::AwaitingPin)
            }
            SessionState::PinValidation => self.validate_pin(operation, env),
            SessionState::SelectOperation => {
                self.context.set_operation(operation);
                self.state = SessionState::Transaction;
                Ok(AtmNotice::OperationSelected(operation))
            }
            SessionState::Transaction => Err(AtmError::InvalidTransition {
                state: SessionState::Transaction,
                event: EventKind::SelectOperation,
            }),
        }
    }

    fn handle_execute_transaction(
        &mut self,
        env: &mut AtmEnvironment,
    ) -> Result<AtmNotice, AtmError> {
        match self.state {
            SessionState::Transaction => self.run_transaction(env),
            SessionState::HasCard => {
                // Skipping ahead to execution with no operation chosen ends
                // the visit and ejects the card.
                self.end_session();
                Err(AtmError::InvalidTransition {
                    state: SessionState::HasCard,
                    event: EventKind::ExecuteTransaction,
                })
            }
            state => Err(AtmError::InvalidTransition {
                state,
                event: EventKind::ExecuteTransaction,
            }),
        }
    }

    /// Reads the PIN and, on a match, resolves the card's account.
    ///
    /// A wrong PIN leaves the session in place for another try; there is no
    /// attempt limit. A card whose account the bank does not know ends the
    /// session, since no retry can fix it.
    fn validate_pin(
        &mut self,
        operation: Operation,
        env: &mut AtmEnvironment,
    ) -> Result<AtmNotice, AtmError> {
        let Some(card) = self.context.card().cloned() else {
            return Err(AtmError::InvalidTransition {
                state: self.state,
                event: EventKind::SelectOperation,
            });
        };

        let pin = env.input.read_pin();
        if !card.validate_pin(pin) {
            return Err(AtmError::InvalidPin);
        }

        let number = card.account_number().clone();
        if env.accounts.lookup(&number).is_none() {
            self.end_session();
            return Err(AtmError::AccountNotFound { number });
        }

        self.context.set_account(number);
        self.context.set_operation(operation);
        self.state = SessionState::SelectOperation;
        Ok(AtmNotice::PinAccepted)
    }

    fn run_transaction(&mut self, env: &mut AtmEnvironment) -> Result<AtmNotice, AtmError> {
        match self.context.operation() {
            Some(Operation::Withdraw) => self.run_withdrawal(env),
            Some(Operation::BalanceInquiry) => self.run_balance_inquiry(env),
            None => Err(AtmError::InvalidTransition {
                state: self.state,
                event: EventKind::ExecuteTransaction,
            }),
        }
    }

    /// The withdrawal pipeline, in strict order: amount, balance check,
    /// drawer check, debit, dispense. A dispense the drawer cannot compose
    /// reverses the debit before reporting, so a failed withdrawal never
    /// moves money.
    fn run_withdrawal(&mut self, env: &mut AtmEnvironment) -> Result<AtmNotice, AtmError> {
        let amount = env.input.read_amount();
        if amount.is_zero() {
            return Err(AtmError::InvalidAmount);
        }

        let Some(number) = self.context.account().cloned() else {
            return Err(AtmError::InvalidTransition {
                state: self.state,
                event: EventKind::ExecuteTransaction,
            });
        };
        let Some(account) = env.accounts.lookup_mut(&number) else {
            self.end_session();
            return Err(AtmError::AccountNotFound { number });
        };

        let balance = account.balance();
        if balance < amount {
            return Err(AtmError::InsufficientBalance {
                requested: amount,
                available: balance,
            });
        }
        if !self.inventory.has_sufficient_cash(amount) {
            return Err(AtmError::InsufficientInventory {
                requested: amount,
                available: self.inventory.total_value(),
            });
        }
        if !account.withdraw(amount) {
            return Err(AtmError::InsufficientBalance {
                requested: amount,
                available: account.balance(),
            });
        }

        match self.inventory.dispense(amount) {
            Some(bundle) => {
                self.end_session();
                Ok(AtmNotice::CashDispensed(bundle))
            }
            None => {
                account.deposit(amount);
                Err(AtmError::UnreachableDenomination { amount })
            }
        }
    }

    fn run_balance_inquiry(&mut self, env: &mut AtmEnvironment) -> Result<AtmNotice, AtmError> {
        let Some(number) = self.context.account().cloned() else {
            return Err(AtmError::InvalidTransition {
                state: self.state,
                event: EventKind::ExecuteTransaction,
            });
        };
        let Some(account) = env.accounts.lookup(&number) else {
            self.end_session();
            return Err(AtmError::AccountNotFound { number });
        };

        let balance = account.balance();
        self.end_session();
        Ok(AtmNotice::Balance(balance))
    }

    /// Every route back to idle goes through here, so an idle machine is
    /// always an empty one.
    fn end_session(&mut self) {
        self.context.clear();
        self.state = SessionState::Idle;
    }
}

impl Default for Atm {
    fn default() -> Self {
        Atm::new(CashInventory::default())
    }
}
