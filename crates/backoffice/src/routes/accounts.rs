//! Account management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use secrecy::SecretString;
use serde::Deserialize;

use mfh_store_core::{AccountId, AccountStatus, Role, Username};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{AccountDraft, AccountPatch, AccountSummary};
use crate::routes::auth::Confirmation;
use crate::state::AppState;

/// Create account request body.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Defaults to `seller`.
    pub role: Option<Role>,
    pub shop_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Partial update request body. Absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub password: Option<String>,
    pub role: Option<Role>,
    pub shop_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<AccountStatus>,
}

/// List all active accounts. Password hashes and tokens are never
/// exposed here.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
) -> Json<Vec<AccountSummary>> {
    let summaries = state
        .accounts()
        .list_active()
        .iter()
        .map(AccountSummary::from)
        .collect();
    Json(summaries)
}

/// Create a new account.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Json(body): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountSummary>)> {
    let username = body
        .username
        .as_deref()
        .ok_or_else(|| AppError::Validation("username is required".to_owned()))?;
    let username =
        Username::parse(username).map_err(|e| AppError::Validation(e.to_string()))?;

    let password = body
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("password is required".to_owned()))?;

    let draft = AccountDraft {
        username,
        password: SecretString::from(password),
        role: body.role.unwrap_or_default(),
        shop_name: body.shop_name,
        phone: body.phone,
        email: body.email,
    };

    let account = state.accounts().create(draft)?;
    tracing::info!(account_id = %account.id, created_by = %caller.id, "account created");

    Ok((StatusCode::CREATED, Json(AccountSummary::from(&account))))
}

/// Apply a partial update to an account.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_caller): RequireAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<Json<AccountSummary>> {
    let patch = AccountPatch {
        password: body.password.filter(|p| !p.is_empty()).map(SecretString::from),
        role: body.role,
        shop_name: body.shop_name,
        phone: body.phone,
        email: body.email,
        status: body.status,
    };

    let account = state.accounts().update(AccountId::new(id), patch)?;
    Ok(Json(AccountSummary::from(&account)))
}

/// Soft-delete an account.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<i32>,
) -> Result<Json<Confirmation>> {
    state.accounts().delete(AccountId::new(id))?;
    tracing::info!(account_id = id, deleted_by = %caller.id, "account deactivated");
    Ok(Json(Confirmation { ok: true }))
}
