//! Authentication middleware and extractors.
//!
//! Provides an extractor that resolves the `Authorization: Bearer`
//! header to an active account. Roles are attached as tags only; no
//! authorization policy is applied here.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};

use mfh_store_core::SessionToken;

use crate::models::CurrentAccount;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(account): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", account.username)
/// }
/// ```
pub struct RequireAuth(pub CurrentAccount);

/// Error returned when the bearer token is missing or unknown.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthRejection)?;

        // Only active accounts resolve; a soft-deleted account's token
        // dies with it.
        let account = state
            .accounts()
            .get_by_token(&SessionToken::from(token))
            .ok_or(AuthRejection)?;

        Ok(Self(CurrentAccount::from(&account)))
    }
}
