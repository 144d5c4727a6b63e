//! Order route handlers: webhook ingestion, listing, status updates.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mfh_store_core::{AccountId, OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Order, OrderDraft};
use crate::state::AppState;

/// Inbound webhook payload. Every field is optional; ingestion applies
/// defaults, so this endpoint never rejects a well-formed JSON body.
#[derive(Debug, Deserialize, Default)]
pub struct WebhookOrderRequest {
    pub product: Option<String>,
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub amount: Option<Decimal>,
    pub seller_id: Option<i32>,
}

/// Webhook response: the generated id plus the echoed order.
#[derive(Debug, Serialize)]
pub struct WebhookOrderResponse {
    pub order_id: OrderId,
    pub order: Order,
}

/// Status update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Ingest an order pushed by the payment gateway webhook.
///
/// Unauthenticated by design: the caller is an external system that
/// only ever appends pending orders.
pub async fn ingest(
    State(state): State<AppState>,
    Json(body): Json<WebhookOrderRequest>,
) -> (StatusCode, Json<WebhookOrderResponse>) {
    let draft = OrderDraft {
        product: body.product,
        customer: body.customer,
        phone: body.phone,
        email: body.email,
        amount: body.amount,
        seller_id: body.seller_id.map(AccountId::new),
    };

    let order = state.orders().ingest(draft);
    tracing::info!(order_id = %order.order_id, "order ingested");

    (
        StatusCode::CREATED,
        Json(WebhookOrderResponse {
            order_id: order.order_id.clone(),
            order,
        }),
    )
}

/// List all orders in ingestion order, newest last.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> Json<Vec<Order>> {
    Json(state.orders().list_all())
}

/// Update the status of an order.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Order>> {
    let order_id = OrderId::parse(&id).map_err(|e| AppError::Validation(e.to_string()))?;
    let status = OrderStatus::parse(&body.status);

    let order = state.orders().update_status(&order_id, status)?;
    tracing::info!(order_id = %order.order_id, status = %order.status, "order status updated");

    Ok(Json(order))
}
