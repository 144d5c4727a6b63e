//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::BackofficeConfig;
use crate::store::{AccountStore, MemoryAccountStore, MemoryOrderLedger, OrderLedger};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the account directory, the order ledger, and the configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BackofficeConfig,
    accounts: Arc<dyn AccountStore>,
    orders: Arc<dyn OrderLedger>,
}

impl AppState {
    /// Create a new application state backed by the in-memory stores.
    #[must_use]
    pub fn new(config: BackofficeConfig) -> Self {
        let accounts: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
        let orders: Arc<dyn OrderLedger> = Arc::new(MemoryOrderLedger::new(config.default_seller_id));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                accounts,
                orders,
            }),
        }
    }

    /// Get a reference to the back office configuration.
    #[must_use]
    pub fn config(&self) -> &BackofficeConfig {
        &self.inner.config
    }

    /// Get a reference to the account directory.
    #[must_use]
    pub fn accounts(&self) -> &dyn AccountStore {
        self.inner.accounts.as_ref()
    }

    /// Get a reference to the order ledger.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderLedger {
        self.inner.orders.as_ref()
    }
}
