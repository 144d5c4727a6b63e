//! Core types for the MFH Store back office.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order_id;
pub mod status;
pub mod token;
pub mod username;

pub use id::*;
pub use order_id::{OrderId, OrderIdError};
pub use status::*;
pub use token::SessionToken;
pub use username::{Username, UsernameError};
