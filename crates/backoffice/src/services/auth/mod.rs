//! Authentication service.
//!
//! Verifies credentials against the account directory. Both operations
//! are single-shot: a failure is terminal for that call, nothing
//! retries.

mod error;
pub mod password;
pub mod token;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};

use mfh_store_core::Username;

use crate::models::{Account, AccountPatch};
use crate::store::AccountStore;

/// Authentication service over the account directory.
pub struct AuthService<'a> {
    accounts: &'a dyn AccountStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(accounts: &'a dyn AccountStore) -> Self {
        Self { accounts }
    }

    /// Authenticate a username/password pair.
    ///
    /// Only active accounts can log in; inactive accounts, unknown
    /// usernames, and wrong passwords all collapse into the same
    /// `InvalidCredentials` so the failure mode leaks nothing.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any mismatch.
    pub fn authenticate(&self, username: &str, plaintext: &str) -> Result<Account, AuthError> {
        let username = Username::parse(username).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .accounts
            .get_by_username(&username)
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify(plaintext, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account)
    }

    /// Change an account's password after re-authenticating with the
    /// old one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the old password does
    /// not authenticate, `AuthError::InvalidPassword` if the new
    /// password is empty.
    pub fn change_password(
        &self,
        username: &str,
        old_plaintext: &str,
        new_password: SecretString,
    ) -> Result<(), AuthError> {
        if new_password.expose_secret().is_empty() {
            return Err(AuthError::InvalidPassword(
                "password cannot be empty".to_owned(),
            ));
        }

        let account = self.authenticate(username, old_plaintext)?;

        self.accounts.update(
            account.id,
            AccountPatch {
                password: Some(new_password),
                ..AccountPatch::default()
            },
        )?;

        Ok(())
    }
}
