//! Cashpoint: an ATM session core built around one explicit state machine
//!
//! A session is a value: the current [`SessionState`], the working
//! [`SessionContext`], and the drawer's [`CashInventory`] all live inside an
//! [`Atm`] and change only through [`Atm::dispatch`]. The bank and the
//! cardholder's keypad stay outside, injected per event through an
//! [`AtmEnvironment`], so the machine itself never owns an account or reads
//! a terminal.
//!
//! # Core Concepts
//!
//! - **States**: one `SessionState` enum, from `Idle` through `Transaction`
//! - **Events**: `AtmEvent` inputs dispatched against the transition table
//! - **Outcomes**: `Ok(AtmNotice)` for accepted events, `Err(AtmError)` for
//!   rejected ones, with retryable rejections leaving the session in place
//! - **Journal**: an immutable `SessionJournal` of every dispatch
//!
//! # Example
//!
//! ```rust
//! use cashpoint::{
//!     Account, Atm, AtmEnvironment, AtmEvent, AtmNotice, Card, CashInventory,
//!     InMemoryAccounts, Money, Operation, PinCode, QueuedInput,
//! };
//!
//! let accounts = InMemoryAccounts::new()
//!     .with_account(Account::new("ACC001", Money::from_units(5_000)));
//! let input = QueuedInput::new()
//!     .with_pin(PinCode::new(1111))
//!     .with_amount(Money::from_units(130));
//!
//! let mut env = AtmEnvironment::new(accounts, input);
//! let mut atm = Atm::new(CashInventory::default());
//!
//! let card = Card::new("CARD001", PinCode::new(1111), "ACC001");
//! atm.dispatch(AtmEvent::InsertCard(card), &mut env).unwrap();
//! atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env).unwrap();
//! atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env).unwrap();
//! atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env).unwrap();
//!
//! let outcome = atm.dispatch(AtmEvent::ExecuteTransaction, &mut env).unwrap();
//! match outcome {
//!     AtmNotice::CashDispensed(bundle) => {
//!         assert_eq!(bundle.total(), Money::from_units(130));
//!     }
//!     other => panic!("expected dispensed cash, got {other}"),
//! }
//! ```

pub mod bank;
pub mod cash;
pub mod journal;
pub mod session;

// Re-export commonly used types
pub use bank::{
    Account, AccountNumber, AccountRegistry, Card, CardNumber, InMemoryAccounts, PinCode,
};
pub use cash::{CashBundle, CashInventory, Denomination, Money};
pub use journal::{JournalRecord, OutcomeKind, SessionJournal};
pub use session::{
    Atm, AtmEnvironment, AtmError, AtmEvent, AtmNotice, EventKind, InputSource, Operation,
    QueuedInput, SessionContext, SessionId, SessionState,
};
