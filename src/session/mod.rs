//! The ATM session itself: states, events, context, and the machine.
//!
//! The [`Atm`] is the only mutator. Everything else in this module is
//! either a plain value ([`SessionState`], [`AtmEvent`],
//! [`AtmNotice`], [`AtmError`]) or a seam to the outside world
//! ([`AtmEnvironment`], [`InputSource`]).

mod context;
mod environment;
mod error;
mod event;
mod machine;
mod notice;
mod state;

pub use context::{SessionContext, SessionId};
pub use environment::{AtmEnvironment, InputSource, QueuedInput};
pub use error::AtmError;
pub use event::{AtmEvent, EventKind, Operation};
pub use machine::Atm;
pub use notice::AtmNotice;
pub use state::SessionState;
