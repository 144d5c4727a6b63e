//! Authentication route handlers.

use axum::{Json, extract::State};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use mfh_store_core::SessionToken;

use crate::error::Result;
use crate::models::AccountSummary;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: the account summary plus its bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub account: AccountSummary,
    pub token: SessionToken,
}

/// Change password request body.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

/// Confirmation body for state-changing endpoints.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub ok: bool,
}

/// Handle a login request.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(state.accounts());
    let account = auth.authenticate(&body.username, &body.password)?;

    tracing::info!(account_id = %account.id, "login succeeded");

    Ok(Json(LoginResponse {
        token: account.token.clone(),
        account: AccountSummary::from(&account),
    }))
}

/// Handle a password change request.
///
/// Re-authenticates with the old password before rotating.
pub async fn change_password(
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<Confirmation>> {
    let auth = AuthService::new(state.accounts());
    auth.change_password(
        &body.username,
        &body.old_password,
        SecretString::from(body.new_password),
    )?;

    Ok(Json(Confirmation { ok: true }))
}
