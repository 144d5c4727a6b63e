//! Dashboard stats route handler.

use axum::{Json, extract::State};

use crate::middleware::RequireAuth;
use crate::services::stats::{DashboardStats, StatsAggregator};
use crate::state::AppState;

/// Compute the dashboard counters.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> Json<DashboardStats> {
    let aggregator = StatsAggregator::new(state.accounts(), state.orders());
    Json(aggregator.compute())
}
