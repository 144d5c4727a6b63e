//! End-to-end scenarios across the account directory, auth service,
//! order ledger, and stats aggregator.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use secrecy::SecretString;

use mfh_store_backoffice::models::{AccountDraft, AccountPatch, OrderDraft};
use mfh_store_backoffice::services::auth::{AuthError, AuthService};
use mfh_store_backoffice::services::stats::StatsAggregator;
use mfh_store_backoffice::store::{
    AccountStore, MemoryAccountStore, MemoryOrderLedger, OrderLedger, StoreError,
};
use mfh_store_core::{AccountId, OrderStatus, Role, Username};

fn draft(username: &str, password: &str, role: Role) -> AccountDraft {
    AccountDraft::new(
        Username::parse(username).unwrap(),
        SecretString::from(password.to_owned()),
        role,
    )
}

#[test]
fn seller_account_lifecycle() {
    let accounts = MemoryAccountStore::new();
    let auth = AuthService::new(&accounts);

    // Create bob the seller.
    let bob = accounts.create(draft("bob", "secret1", Role::Seller)).unwrap();
    assert_eq!(bob.id, AccountId::new(1));
    assert_eq!(bob.shop_name, "Toko bob");

    // He can log in with the right password, not with the wrong one.
    assert!(auth.authenticate("bob", "secret1").is_ok());
    assert!(matches!(
        auth.authenticate("bob", "wrong"),
        Err(AuthError::InvalidCredentials)
    ));

    // A second bob is rejected.
    assert_eq!(
        accounts
            .create(draft("bob", "other", Role::Seller))
            .unwrap_err(),
        StoreError::DuplicateUsername
    );

    // Soft delete: login dies, audit lookup survives.
    accounts.delete(bob.id).unwrap();
    assert!(matches!(
        auth.authenticate("bob", "secret1"),
        Err(AuthError::InvalidCredentials)
    ));
    assert!(accounts.get(bob.id).is_some());
    assert!(accounts.list_active().is_empty());
}

#[test]
fn partial_update_does_not_clobber() {
    let accounts = MemoryAccountStore::new();
    let auth = AuthService::new(&accounts);

    let mut d = draft("seller1", "rahasia-02", Role::Seller);
    d.email = Some("seller1@mfhstore.id".to_owned());
    let created = accounts.create(d).unwrap();

    accounts
        .update(
            created.id,
            AccountPatch {
                phone: Some("081234567890".to_owned()),
                ..AccountPatch::default()
            },
        )
        .unwrap();

    let after = accounts.get(created.id).unwrap();
    assert_eq!(after.phone, "081234567890");
    assert_eq!(after.email, "seller1@mfhstore.id");
    assert_eq!(after.role, Role::Seller);
    // Password untouched: the original one still authenticates.
    assert!(auth.authenticate("seller1", "rahasia-02").is_ok());
}

#[test]
fn order_completion_moves_the_dashboard() {
    let accounts = MemoryAccountStore::new();
    accounts
        .create(draft("admin", "rahasia-01", Role::Admin))
        .unwrap();
    let orders = MemoryOrderLedger::new(AccountId::new(2));

    let order = orders.ingest(OrderDraft {
        product: Some("X".to_owned()),
        amount: Some(Decimal::new(100, 0)),
        ..OrderDraft::default()
    });
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.order_id.as_str().starts_with("MFH"));

    let aggregator = StatsAggregator::new(&accounts, &orders);
    let before = aggregator.compute();

    orders
        .update_status(&order.order_id, OrderStatus::Completed)
        .unwrap();

    let after = aggregator.compute();
    assert_eq!(after.completed_orders, before.completed_orders + 1);
    assert_eq!(after.pending_orders, before.pending_orders - 1);
    assert_eq!(after.revenue_today, Decimal::new(100, 0));
}

#[test]
fn password_rotation_end_to_end() {
    let accounts = MemoryAccountStore::new();
    let auth = AuthService::new(&accounts);
    accounts.create(draft("bob", "secret1", Role::Seller)).unwrap();

    auth.change_password("bob", "secret1", SecretString::from("secret2".to_owned()))
        .unwrap();

    assert!(auth.authenticate("bob", "secret2").is_ok());
    assert!(auth.authenticate("bob", "secret1").is_err());

    // The session token survives the rotation.
    let account = auth.authenticate("bob", "secret2").unwrap();
    assert!(accounts.get_by_token(&account.token).is_some());
}
