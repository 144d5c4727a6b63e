//! Account directory and order ledger.
//!
//! # Ownership
//!
//! Each store is the sole owner of its collection; all mutation flows
//! through it so the invariants (id monotonicity, username uniqueness,
//! order id uniqueness) hold at any point in time.
//!
//! # Concurrency
//!
//! The in-memory implementations guard the whole collection with one
//! coarse `RwLock` per store. Mutating operations take the write lock,
//! reads take the read lock and return snapshot clones, so no lock is
//! held across an await point or outside a single call.
//!
//! # Persistence
//!
//! Nothing here is durable; the traits exist so a durable backend can
//! be slotted in later, provided it preserves id monotonicity and
//! order id uniqueness across restarts.

pub mod accounts;
pub mod orders;

use thiserror::Error;

pub use accounts::{AccountStore, MemoryAccountStore};
pub use orders::{MemoryOrderLedger, OrderLedger};

/// Errors reported by the stores.
///
/// All variants are local, recoverable conditions for the caller;
/// none is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An account with this username already exists (any status).
    #[error("username already taken")]
    DuplicateUsername,

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Password hashing failed while materializing a draft or patch.
    #[error("password hashing failed")]
    PasswordHash,
}
