//! Dashboard statistics.
//!
//! Pure read-only rollups over the account directory and the order
//! ledger. Everything is recomputed on each call; nothing here is
//! stored.

use rust_decimal::Decimal;
use serde::Serialize;

use mfh_store_core::{OrderStatus, Role};

use crate::store::{AccountStore, OrderLedger};

/// Aggregate counters for the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub completed_orders: usize,
    pub total_active_users: usize,
    pub total_sellers: usize,
    pub total_admins: usize,
    /// Sum of order amounts whose UTC date is today. Derived on read.
    pub revenue_today: Decimal,
}

/// Read-only aggregator over both stores.
pub struct StatsAggregator<'a> {
    accounts: &'a dyn AccountStore,
    orders: &'a dyn OrderLedger,
}

impl<'a> StatsAggregator<'a> {
    /// Create a new aggregator.
    #[must_use]
    pub const fn new(accounts: &'a dyn AccountStore, orders: &'a dyn OrderLedger) -> Self {
        Self { accounts, orders }
    }

    /// Compute the current dashboard counters.
    #[must_use]
    pub fn compute(&self) -> DashboardStats {
        let orders = self.orders.list_all();
        let active = self.accounts.list_active();
        let today = chrono::Utc::now().date_naive();

        DashboardStats {
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            completed_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Completed)
                .count(),
            total_active_users: active.len(),
            total_sellers: self.accounts.list_by_role(Role::Seller).len(),
            total_admins: self.accounts.list_by_role(Role::Admin).len(),
            revenue_today: orders
                .iter()
                .filter(|o| o.created_at.date_naive() == today)
                .map(|o| o.amount)
                .sum(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{AccountDraft, OrderDraft};
    use crate::store::{MemoryAccountStore, MemoryOrderLedger};
    use mfh_store_core::{AccountId, Username};

    fn seeded_stores() -> (MemoryAccountStore, MemoryOrderLedger) {
        let accounts = MemoryAccountStore::new();
        accounts
            .create(AccountDraft::new(
                Username::parse("admin").unwrap(),
                "rahasia-01".to_owned().into(),
                Role::Admin,
            ))
            .unwrap();
        accounts
            .create(AccountDraft::new(
                Username::parse("seller1").unwrap(),
                "rahasia-02".to_owned().into(),
                Role::Seller,
            ))
            .unwrap();
        (accounts, MemoryOrderLedger::new(AccountId::new(2)))
    }

    #[test]
    fn test_compute_on_empty_ledger() {
        let (accounts, orders) = seeded_stores();
        let stats = StatsAggregator::new(&accounts, &orders).compute();

        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_active_users, 2);
        assert_eq!(stats.total_admins, 1);
        assert_eq!(stats.total_sellers, 1);
        assert_eq!(stats.revenue_today, Decimal::ZERO);
    }

    #[test]
    fn test_completing_an_order_moves_the_counters() {
        let (accounts, orders) = seeded_stores();
        let order = orders.ingest(OrderDraft {
            amount: Some(Decimal::new(100, 0)),
            ..OrderDraft::default()
        });

        let aggregator = StatsAggregator::new(&accounts, &orders);
        let before = aggregator.compute();
        assert_eq!(before.pending_orders, 1);
        assert_eq!(before.completed_orders, 0);

        orders
            .update_status(&order.order_id, OrderStatus::Completed)
            .unwrap();

        let after = aggregator.compute();
        assert_eq!(after.pending_orders, before.pending_orders - 1);
        assert_eq!(after.completed_orders, before.completed_orders + 1);
        assert_eq!(after.total_orders, 1);
    }

    #[test]
    fn test_revenue_today_sums_todays_amounts() {
        let (accounts, orders) = seeded_stores();
        orders.ingest(OrderDraft {
            amount: Some(Decimal::new(150_000, 0)),
            ..OrderDraft::default()
        });
        orders.ingest(OrderDraft {
            amount: Some(Decimal::new(50_000, 0)),
            ..OrderDraft::default()
        });

        let stats = StatsAggregator::new(&accounts, &orders).compute();
        assert_eq!(stats.revenue_today, Decimal::new(200_000, 0));
    }

    #[test]
    fn test_soft_deleted_accounts_drop_out_of_user_counts() {
        let (accounts, orders) = seeded_stores();
        accounts.delete(AccountId::new(2)).unwrap();

        let stats = StatsAggregator::new(&accounts, &orders).compute();
        assert_eq!(stats.total_active_users, 1);
        assert_eq!(stats.total_sellers, 0);
    }
}
