//! Domain types for the back office.

pub mod account;
pub mod order;

pub use account::{Account, AccountDraft, AccountPatch, AccountSummary, CurrentAccount};
pub use order::{Order, OrderDraft};
