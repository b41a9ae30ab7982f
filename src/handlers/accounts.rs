//! Account registration handler

use crate::{
    error::Result,
    middleware::AppState,
    models::{RegisterRequest, TokenResponse},
};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// POST /api/users — register an account and return its first token
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let token = state.account_service.register(req).await?;

    Ok(Json(TokenResponse { token }))
}
