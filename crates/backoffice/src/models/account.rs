//! Account domain types.
//!
//! These types represent validated domain objects separate from the wire
//! shapes in the route layer.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Serialize;

use mfh_store_core::{AccountId, AccountStatus, Role, SessionToken, Username};

/// A back office account (domain type).
///
/// Owned exclusively by the account store; everything outside the store
/// works with clones. The password hash never leaves this type except
/// for verification inside the auth service, and is excluded from every
/// serialized projection.
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID, monotonically assigned and never reused.
    pub id: AccountId,
    /// Login username, unique across the whole directory.
    pub username: Username,
    /// Argon2id password hash (PHC string).
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    /// Display name of the seller's shop.
    pub shop_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Lifecycle status; `Inactive` accounts are soft-deleted.
    pub status: AccountStatus,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Current opaque session token.
    pub token: SessionToken,
}

impl Account {
    /// Whether the account participates in listings and login.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, AccountStatus::Active)
    }
}

/// Input for creating an account.
///
/// The plaintext password is wrapped in [`SecretString`] so it cannot
/// leak through `Debug` output on the way to the hasher.
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub username: Username,
    pub password: SecretString,
    pub role: Role,
    /// Defaults to `"Toko <username>"` when absent.
    pub shop_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl AccountDraft {
    /// Create a draft with only the required fields.
    #[must_use]
    pub const fn new(username: Username, password: SecretString, role: Role) -> Self {
        Self {
            username,
            password,
            role,
            shop_name: None,
            phone: None,
            email: None,
        }
    }
}

/// A sparse update to an account.
///
/// Only fields that are `Some` are applied; everything else is left
/// untouched. A present password is re-hashed before storing.
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub password: Option<SecretString>,
    pub role: Option<Role>,
    pub shop_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<AccountStatus>,
}

/// The account projection exposed by the transport layer.
///
/// Deliberately omits the password hash and the session token.
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub username: Username,
    pub role: Role,
    pub shop_name: String,
    pub phone: String,
    pub email: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
            shop_name: account.shop_name.clone(),
            phone: account.phone.clone(),
            email: account.email.clone(),
            status: account.status,
            created_at: account.created_at,
        }
    }
}

/// The authenticated caller attached to a request by the auth extractor.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub id: AccountId,
    pub username: Username,
    pub role: Role,
}

impl From<&Account> for CurrentAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
        }
    }
}
