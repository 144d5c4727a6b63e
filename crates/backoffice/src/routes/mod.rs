//! HTTP route handlers for the back office JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                      - Health check (in main.rs)
//!
//! # Auth
//! POST   /api/auth/login              - Login with username/password
//! POST   /api/auth/password           - Change password
//!
//! # Accounts (requires bearer token)
//! GET    /api/accounts                - List active accounts
//! POST   /api/accounts                - Create account
//! PATCH  /api/accounts/{id}           - Partial update
//! DELETE /api/accounts/{id}           - Soft delete
//!
//! # Orders
//! POST   /api/webhook/orders          - Inbound order webhook (open)
//! GET    /api/orders                  - List orders (bearer)
//! PATCH  /api/orders/{id}/status      - Update order status (bearer)
//!
//! # Stats (requires bearer token)
//! GET    /api/stats                   - Dashboard counters
//! ```

pub mod accounts;
pub mod auth;
pub mod orders;
pub mod stats;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/password", post(auth::change_password))
}

/// Create the account management router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(accounts::list).post(accounts::create))
        .route(
            "/{id}",
            axum::routing::patch(accounts::update).delete(accounts::delete),
        )
}

/// Create the order router (listing and status updates).
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list))
        .route("/{id}/status", axum::routing::patch(orders::update_status))
}

/// Create the full `/api` router.
pub fn routes() -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .nest("/auth", auth_routes())
            .nest("/accounts", account_routes())
            .nest("/orders", order_routes())
            .route("/webhook/orders", post(orders::ingest))
            .route("/stats", get(stats::dashboard)),
    )
}
