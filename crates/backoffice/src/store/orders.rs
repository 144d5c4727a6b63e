//! Order ledger.
//!
//! Records orders pushed in through the inbound webhook. The ledger is
//! append-only: orders are never deleted, only their status changes.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;

use mfh_store_core::{AccountId, OrderId, OrderStatus};

use super::StoreError;
use crate::models::{Order, OrderDraft};

/// The order ledger interface.
pub trait OrderLedger: Send + Sync {
    /// Record an inbound order.
    ///
    /// Never fails: absent payload fields are defaulted, the order id
    /// is generated here, and the initial status is `pending`.
    fn ingest(&self, draft: OrderDraft) -> Order;

    /// Update the status of an order in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no order has this id. The
    /// legacy behavior of silently swallowing unknown ids was a latent
    /// bug, not a contract.
    fn update_status(&self, order_id: &OrderId, status: OrderStatus) -> Result<Order, StoreError>;

    /// All orders in ingestion order, newest last.
    fn list_all(&self) -> Vec<Order>;
}

/// Ledger contents, guarded as one unit by the outer lock.
#[derive(Default)]
struct Ledger {
    orders: Vec<Order>,
    /// Every id ever issued, so generation can probe for a free one.
    issued: HashSet<String>,
}

impl Ledger {
    /// Generate a unique order id from the current timestamp and a
    /// random three digit suffix.
    ///
    /// The suffix starts at a random value and probes forward on
    /// collision; once a whole second is saturated the timestamp is
    /// advanced. This keeps ids unique even under burst ingestion,
    /// where a purely random suffix would collide.
    fn next_order_id(&self) -> OrderId {
        let mut unix_seconds = Utc::now().timestamp();
        let mut suffix = rand::rng().random_range(0..1000u16);

        let mut probes = 0u16;
        loop {
            let candidate = OrderId::from_parts(unix_seconds, suffix);
            if !self.issued.contains(candidate.as_str()) {
                return candidate;
            }
            suffix = (suffix + 1) % 1000;
            probes += 1;
            if probes == 1000 {
                unix_seconds += 1;
                probes = 0;
            }
        }
    }
}

/// In-memory append-only order ledger behind a coarse `RwLock`.
pub struct MemoryOrderLedger {
    inner: RwLock<Ledger>,
    /// Seller assigned when the webhook payload names none.
    default_seller: AccountId,
}

impl MemoryOrderLedger {
    /// Create an empty ledger routing unattributed orders to
    /// `default_seller`.
    #[must_use]
    pub fn new(default_seller: AccountId) -> Self {
        Self {
            inner: RwLock::new(Ledger::default()),
            default_seller,
        }
    }
}

impl OrderLedger for MemoryOrderLedger {
    fn ingest(&self, draft: OrderDraft) -> Order {
        let mut ledger = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let order = Order {
            order_id: ledger.next_order_id(),
            product: draft.product.unwrap_or_default(),
            customer: draft.customer.unwrap_or_default(),
            phone: draft.phone.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            amount: draft.amount.unwrap_or(Decimal::ZERO),
            status: OrderStatus::Pending,
            seller_id: draft.seller_id.unwrap_or(self.default_seller),
            created_at: Utc::now(),
        };

        ledger.issued.insert(order.order_id.as_str().to_owned());
        ledger.orders.push(order.clone());
        order
    }

    fn update_status(&self, order_id: &OrderId, status: OrderStatus) -> Result<Order, StoreError> {
        let mut ledger = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let order = ledger
            .orders
            .iter_mut()
            .find(|o| o.order_id == *order_id)
            .ok_or(StoreError::NotFound)?;
        order.status = status;
        Ok(order.clone())
    }

    fn list_all(&self) -> Vec<Order> {
        let ledger = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        ledger.orders.clone()
    }
}
