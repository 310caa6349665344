//! The outside world a session talks to: the bank and the keypad.

use crate::bank::{AccountRegistry, PinCode};
use crate::cash::Money;
use std::collections::VecDeque;

/// Blocking reads from the cardholder.
///
/// PIN digits and withdrawal amounts are not event payloads; the machine
/// asks for them in the middle of a transition, at the moment the original
/// flow prompts for them. Implementations block until a value is available.
pub trait InputSource {
    /// Reads the next PIN the cardholder types.
    fn read_pin(&mut self) -> PinCode;

    /// Reads the next withdrawal amount the cardholder types.
    fn read_amount(&mut self) -> Money;
}

/// A scripted input source that replays queued values in order.
///
/// Built for tests and demos: queue the PINs and amounts a scenario needs
/// up front, then drive the machine.
///
/// # Example
///
/// ```rust
/// use cashpoint::{InputSource, Money, PinCode, QueuedInput};
///
/// let mut input = QueuedInput::new()
///     .with_pin(PinCode::new(1111))
///     .with_amount(Money::from_units(300));
///
/// assert_eq!(input.read_pin(), PinCode::new(1111));
/// assert_eq!(input.read_amount(), Money::from_units(300));
/// ```
///
/// # Panics
///
/// Reading past the end of either queue panics; a scenario that under-queues
/// its script is a bug in the scenario.
#[derive(Clone, Debug, Default)]
pub struct QueuedInput {
    pins: VecDeque<PinCode>,
    amounts: VecDeque<Money>,
}

impl QueuedInput {
    /// Creates a source with nothing queued.
    pub fn new() -> Self {
        QueuedInput::default()
    }

    /// Queues a PIN and returns the source, for fluent construction.
    pub fn with_pin(mut self, pin: PinCode) -> Self {
        self.pins.push_back(pin);
        self
    }

    /// Queues an amount and returns the source, for fluent construction.
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amounts.push_back(amount);
        self
    }
}

impl InputSource for QueuedInput {
    fn read_pin(&mut self) -> PinCode {
        match self.pins.pop_front() {
            Some(pin) => pin,
            None => panic!("queued input exhausted: no PIN scripted"),
        }
    }

    fn read_amount(&mut self) -> Money {
        match self.amounts.pop_front() {
            Some(amount) => amount,
            None => panic!("queued input exhausted: no amount scripted"),
        }
    }
}

/// Everything external a dispatch may touch.
///
/// The machine owns its state, context, drawer, and journal; the bank and
/// the cardholder's keypad arrive here, with every event. Swapping either
/// is how tests and demos take control of a session.
pub struct AtmEnvironment {
    /// The book of accounts the machine can read and debit.
    pub accounts: Box<dyn AccountRegistry>,
    /// Where PINs and amounts come from.
    pub input: Box<dyn InputSource>,
}

impl AtmEnvironment {
    /// Wraps a registry and an input source into an environment.
    pub fn new(
        accounts: impl AccountRegistry + 'static,
        input: impl InputSource + 'static,
    ) -> Self {
        AtmEnvironment {
            accounts: Box::new(accounts),
            input: Box::new(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_values_replay_in_order() {
        let mut input = QueuedInput::new()
            .with_pin(PinCode::new(1111))
            .with_pin(PinCode::new(2222))
            .with_amount(Money::from_units(50));

        assert_eq!(input.read_pin(), PinCode::new(1111));
        assert_eq!(input.read_pin(), PinCode::new(2222));
        assert_eq!(input.read_amount(), Money::from_units(50));
    }

    #[test]
    #[should_panic(expected = "no PIN scripted")]
    fn reading_an_unscripted_pin_panics() {
        let mut input = QueuedInput::new();
        let _ = input.read_pin();
    }

    #[test]
    #[should_panic(expected = "no amount scripted")]
    fn reading_an_unscripted_amount_panics() {
        let mut input = QueuedInput::new().with_pin(PinCode::new(1111));
        let _ = input.read_amount();
    }
}
