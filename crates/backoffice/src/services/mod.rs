//! Business services on top of the stores.

pub mod auth;
pub mod stats;
