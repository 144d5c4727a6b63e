//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong password, unknown or inactive account).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Replacement password failed validation.
    #[error("password validation failed: {0}")]
    InvalidPassword(String),

    /// Store error while applying a credential change.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
