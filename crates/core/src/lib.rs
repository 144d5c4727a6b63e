//! MFH Store Core - Shared types library.
//!
//! This crate provides common types used across the MFH Store back
//! office: type-safe entity IDs, validated usernames, opaque session
//! tokens, order ids in the public `MFH...` format, and the role and
//! status enums shared by the account directory and the order ledger.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, usernames, tokens,
//!   order ids, and status/role enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
