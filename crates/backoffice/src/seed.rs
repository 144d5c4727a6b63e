//! Startup seeding of the initial admin account.
//!
//! The legacy system shipped with hardcoded admin/seller credentials
//! baked into the source. Here the initial admin is provisioned from
//! configuration instead, and only when the username is still free.

use mfh_store_core::{Role, Username};

use crate::config::BackofficeConfig;
use crate::models::AccountDraft;
use crate::store::{AccountStore, StoreError};

/// Username of the seeded administrator.
const ADMIN_USERNAME: &str = "admin";

/// Seed the initial `admin` account from configuration.
///
/// Does nothing when no seed password is configured or when the
/// username is already taken (including by a soft-deleted account).
pub fn seed_initial_admin(accounts: &dyn AccountStore, config: &BackofficeConfig) {
    let Some(password) = config.admin_password.clone() else {
        tracing::warn!(
            "BACKOFFICE_ADMIN_PASSWORD not set; starting with an empty account directory"
        );
        return;
    };

    let Ok(username) = Username::parse(ADMIN_USERNAME) else {
        return;
    };

    let draft = AccountDraft {
        username,
        password,
        role: Role::Admin,
        shop_name: Some("MFH Store Admin".to_owned()),
        phone: None,
        email: Some("admin@mfhstore.id".to_owned()),
    };

    match accounts.create(draft) {
        Ok(account) => {
            tracing::info!(account_id = %account.id, "seeded initial admin account");
        }
        Err(StoreError::DuplicateUsername) => {
            tracing::debug!("admin account already present, skipping seed");
        }
        Err(error) => {
            tracing::error!(%error, "failed to seed admin account");
        }
    }
}
