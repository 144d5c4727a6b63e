//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use mfh_store_core::{AccountId, OrderId, OrderStatus};

/// An order recorded in the ledger.
///
/// Orders arrive through the inbound webhook, are never deleted, and
/// mutate only through status updates.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Globally unique order id, generated at ingestion time.
    pub order_id: OrderId,
    pub product: String,
    pub customer: String,
    pub phone: String,
    pub email: String,
    pub amount: Decimal,
    pub status: OrderStatus,
    /// Seller the order is routed to.
    pub seller_id: AccountId,
    /// Ingestion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Webhook payload for an inbound order.
///
/// Every field is optional; ingestion fills defaults so the webhook
/// never fails on sparse payloads.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub product: Option<String>,
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub amount: Option<Decimal>,
    /// Overrides the ledger's default seller assignment when present.
    pub seller_id: Option<AccountId>,
}
