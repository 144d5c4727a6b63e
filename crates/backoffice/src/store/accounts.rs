//! Account directory.
//!
//! Sole owner of the account collection. Creation hashes the password
//! and issues the session token, so no caller ever holds a plaintext
//! credential past this boundary.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use secrecy::ExposeSecret;

use mfh_store_core::{AccountId, AccountStatus, Role, SessionToken, Username};

use super::StoreError;
use crate::models::{Account, AccountDraft, AccountPatch};
use crate::services::auth::{password, token};

/// The account directory interface.
///
/// All operations are synchronous and bounded; implementations must
/// serialize mutations so the directory invariants hold under
/// concurrent callers.
pub trait AccountStore: Send + Sync {
    /// Create an account from a draft.
    ///
    /// Assigns the next id (`max + 1`, starting at 1), hashes the
    /// password, issues a session token, and defaults the shop name to
    /// `"Toko <username>"` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateUsername`] if any account,
    /// active or inactive, already holds the username.
    fn create(&self, draft: AccountDraft) -> Result<Account, StoreError>;

    /// Point lookup by id, regardless of status (audit/edit flows).
    fn get(&self, id: AccountId) -> Option<Account>;

    /// Lookup by username, scoped to active accounts (login flows).
    fn get_by_username(&self, username: &Username) -> Option<Account>;

    /// Lookup by session token, scoped to active accounts.
    fn get_by_token(&self, token: &SessionToken) -> Option<Account>;

    /// Apply a sparse update: only fields present in the patch change,
    /// and a present password is re-hashed before storing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    fn update(&self, id: AccountId, patch: AccountPatch) -> Result<Account, StoreError>;

    /// Soft-delete: transition the account to `Inactive`.
    ///
    /// Idempotent: deleting an already-inactive account succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown.
    fn delete(&self, id: AccountId) -> Result<(), StoreError>;

    /// All active accounts in insertion order.
    fn list_active(&self) -> Vec<Account>;

    /// Active accounts with the given role, in insertion order.
    fn list_by_role(&self, role: Role) -> Vec<Account>;
}

/// Directory contents, guarded as one unit by the outer lock.
#[derive(Default)]
struct Directory {
    /// Accounts keyed by id. Ids are monotonic, so iteration order is
    /// insertion order.
    accounts: BTreeMap<AccountId, Account>,
    /// Username index covering every status, which is what makes the
    /// uniqueness invariant hold against soft-deleted accounts too.
    by_username: HashMap<String, AccountId>,
}

/// In-memory account directory behind a coarse `RwLock`.
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Directory>,
}

impl MemoryAccountStore {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryAccountStore {
    fn create(&self, draft: AccountDraft) -> Result<Account, StoreError> {
        let mut dir = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if dir.by_username.contains_key(draft.username.as_str()) {
            return Err(StoreError::DuplicateUsername);
        }

        let id = dir
            .accounts
            .last_key_value()
            .map_or(AccountId::new(1), |(max, _)| {
                AccountId::new(max.as_i32() + 1)
            });

        let password_hash = password::hash(draft.password.expose_secret())
            .map_err(|_| StoreError::PasswordHash)?;

        let account = Account {
            id,
            shop_name: draft
                .shop_name
                .unwrap_or_else(|| format!("Toko {}", draft.username)),
            username: draft.username,
            password_hash,
            role: draft.role,
            phone: draft.phone.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            status: AccountStatus::Active,
            created_at: Utc::now(),
            token: token::issue(),
        };

        dir.by_username
            .insert(account.username.as_str().to_owned(), id);
        dir.accounts.insert(id, account.clone());

        Ok(account)
    }

    fn get(&self, id: AccountId) -> Option<Account> {
        let dir = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        dir.accounts.get(&id).cloned()
    }

    fn get_by_username(&self, username: &Username) -> Option<Account> {
        let dir = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let id = dir.by_username.get(username.as_str())?;
        dir.accounts.get(id).filter(|a| a.is_active()).cloned()
    }

    fn get_by_token(&self, token: &SessionToken) -> Option<Account> {
        let dir = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        dir.accounts
            .values()
            .find(|a| a.is_active() && a.token == *token)
            .cloned()
    }

    fn update(&self, id: AccountId, patch: AccountPatch) -> Result<Account, StoreError> {
        // Hash outside the write lock; hashing is the slow part.
        let password_hash = match patch.password {
            Some(ref plaintext) => Some(
                password::hash(plaintext.expose_secret()).map_err(|_| StoreError::PasswordHash)?,
            ),
            None => None,
        };

        let mut dir = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let account = dir.accounts.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(hash) = password_hash {
            account.password_hash = hash;
        }
        if let Some(role) = patch.role {
            account.role = role;
        }
        if let Some(shop_name) = patch.shop_name {
            account.shop_name = shop_name;
        }
        if let Some(phone) = patch.phone {
            account.phone = phone;
        }
        if let Some(email) = patch.email {
            account.email = email;
        }
        if let Some(status) = patch.status {
            account.status = status;
        }

        Ok(account.clone())
    }

    fn delete(&self, id: AccountId) -> Result<(), StoreError> {
        let mut dir = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let account = dir.accounts.get_mut(&id).ok_or(StoreError::NotFound)?;
        account.status = AccountStatus::Inactive;
        Ok(())
    }

    fn list_active(&self) -> Vec<Account> {
        let dir = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        dir.accounts
            .values()
            .filter(|a| a.is_active())
            .cloned()
            .collect()
    }

    fn list_by_role(&self, role: Role) -> Vec<Account> {
        let dir = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        dir.accounts
            .values()
            .filter(|a| a.is_active() && a.role == role)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(username: &str, password: &str, role: Role) -> AccountDraft {
        AccountDraft::new(
            Username::parse(username).unwrap(),
            password.to_owned().into(),
            role,
        )
    }

    #[test]
    fn test_create_assigns_ids_from_one() {
        let store = MemoryAccountStore::new();
        let a = store.create(draft("admin", "rahasia-01", Role::Admin)).unwrap();
        let b = store.create(draft("seller1", "rahasia-02", Role::Seller)).unwrap();
        assert_eq!(a.id, AccountId::new(1));
        assert_eq!(b.id, AccountId::new(2));
    }

    #[test]
    fn test_create_defaults_shop_name_and_profile() {
        let store = MemoryAccountStore::new();
        let account = store.create(draft("bob", "secret1", Role::Seller)).unwrap();
        assert_eq!(account.shop_name, "Toko bob");
        assert_eq!(account.phone, "");
        assert_eq!(account.email, "");
        assert_eq!(account.status, AccountStatus::Active);
    }

    #[test]
    fn test_create_keeps_explicit_shop_name() {
        let store = MemoryAccountStore::new();
        let mut d = draft("seller1", "rahasia-02", Role::Seller);
        d.shop_name = Some("Toko Digital 1".to_owned());
        let account = store.create(d).unwrap();
        assert_eq!(account.shop_name, "Toko Digital 1");
    }

    #[test]
    fn test_create_rejects_duplicate_username() {
        let store = MemoryAccountStore::new();
        store.create(draft("bob", "secret1", Role::Seller)).unwrap();
        let err = store.create(draft("bob", "other", Role::Admin)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateUsername);
    }

    #[test]
    fn test_create_rejects_duplicate_against_inactive() {
        // Username uniqueness covers soft-deleted accounts, otherwise
        // reuse would expose the stale token of the deleted account.
        let store = MemoryAccountStore::new();
        let account = store.create(draft("bob", "secret1", Role::Seller)).unwrap();
        store.delete(account.id).unwrap();
        let err = store.create(draft("bob", "fresh", Role::Seller)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateUsername);
    }

    #[test]
    fn test_create_issues_distinct_tokens() {
        let store = MemoryAccountStore::new();
        let a = store.create(draft("a1", "rahasia-01", Role::Seller)).unwrap();
        let b = store.create(draft("a2", "rahasia-02", Role::Seller)).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_get_by_username_resolves_immediately() {
        let store = MemoryAccountStore::new();
        let created = store.create(draft("bob", "secret1", Role::Seller)).unwrap();
        let found = store
            .get_by_username(&Username::parse("bob").unwrap())
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[test]
    fn test_get_by_token_scoped_to_active() {
        let store = MemoryAccountStore::new();
        let account = store.create(draft("bob", "secret1", Role::Seller)).unwrap();
        assert!(store.get_by_token(&account.token).is_some());

        store.delete(account.id).unwrap();
        assert!(store.get_by_token(&account.token).is_none());
    }

    #[test]
    fn test_update_is_sparse() {
        let store = MemoryAccountStore::new();
        let created = store.create(draft("bob", "secret1", Role::Seller)).unwrap();

        let patch = AccountPatch {
            phone: Some("081234567890".to_owned()),
            ..AccountPatch::default()
        };
        let updated = store.update(created.id, patch).unwrap();

        assert_eq!(updated.phone, "081234567890");
        assert_eq!(updated.role, created.role);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.password_hash, created.password_hash);
        assert_eq!(updated.token, created.token);
    }

    #[test]
    fn test_update_rehashes_password() {
        let store = MemoryAccountStore::new();
        let created = store.create(draft("bob", "secret1", Role::Seller)).unwrap();

        let patch = AccountPatch {
            password: Some("secret2".to_owned().into()),
            ..AccountPatch::default()
        };
        let updated = store.update(created.id, patch).unwrap();

        assert_ne!(updated.password_hash, created.password_hash);
        assert!(password::verify("secret2", &updated.password_hash));
        assert!(!password::verify("secret1", &updated.password_hash));
    }

    #[test]
    fn test_update_unknown_id() {
        let store = MemoryAccountStore::new();
        let err = store
            .update(AccountId::new(99), AccountPatch::default())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn test_delete_is_soft_and_idempotent() {
        let store = MemoryAccountStore::new();
        let account = store.create(draft("bob", "secret1", Role::Seller)).unwrap();

        store.delete(account.id).unwrap();
        // Gone from listings and username lookup...
        assert!(store.list_active().is_empty());
        assert!(
            store
                .get_by_username(&Username::parse("bob").unwrap())
                .is_none()
        );
        // ...but still retrievable by id for audit.
        let audited = store.get(account.id).unwrap();
        assert_eq!(audited.status, AccountStatus::Inactive);

        // Deleting again still succeeds.
        assert!(store.delete(account.id).is_ok());
        // Unknown ids do not.
        assert_eq!(store.delete(AccountId::new(99)), Err(StoreError::NotFound));
    }

    #[test]
    fn test_listing_filters_and_preserves_insertion_order() {
        let store = MemoryAccountStore::new();
        store.create(draft("admin", "rahasia-01", Role::Admin)).unwrap();
        store.create(draft("seller1", "rahasia-02", Role::Seller)).unwrap();
        let s2 = store.create(draft("seller2", "rahasia-03", Role::Seller)).unwrap();
        store.delete(s2.id).unwrap();

        let active: Vec<_> = store
            .list_active()
            .iter()
            .map(|a| a.username.as_str().to_owned())
            .collect();
        assert_eq!(active, vec!["admin", "seller1"]);

        let sellers = store.list_by_role(Role::Seller);
        assert_eq!(sellers.len(), 1);
        assert_eq!(sellers.first().unwrap().username.as_str(), "seller1");
    }

    #[test]
    fn test_ids_are_never_reused() {
        // max + 1 assignment keeps growing past soft-deleted accounts
        // because they stay in the map.
        let store = MemoryAccountStore::new();
        let a = store.create(draft("a1", "rahasia-01", Role::Seller)).unwrap();
        store.delete(a.id).unwrap();
        let b = store.create(draft("a2", "rahasia-02", Role::Seller)).unwrap();
        assert_eq!(b.id, AccountId::new(2));
    }
}
