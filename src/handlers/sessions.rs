//! Login and identity probe handlers

use crate::{
    auth::AuthContext,
    error::Result,
    middleware::AppState,
    models::{AccountResponse, LoginRequest, TokenResponse},
};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// POST /api/auth — authenticate and return a session token
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let token = state.account_service.login(req).await?;

    Ok(Json(TokenResponse { token }))
}

/// GET /api/auth — return the caller's account, password hash omitted.
/// The authorizer middleware has already attached the identity.
pub async fn current_account(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse> {
    let account = state.account_service.account(auth_context.account_id).await?;

    Ok(Json(AccountResponse::from(account)))
}
