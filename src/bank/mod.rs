//! Bank-side data: accounts, cards, and the registry seam.

mod account;
mod card;
mod registry;

pub use account::{Account, AccountNumber};
pub use card::{Card, CardNumber, PinCode};
pub use registry::{AccountRegistry, InMemoryAccounts};
