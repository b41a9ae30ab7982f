//! Token authorization middleware
//! Gates protected routes: extracts the token header, verifies it, and
//! attaches the resolved identity to the request before any handler runs.

use crate::{auth::jwt::JwtService, error::{AppError, Result}};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

/// Request header carrying the opaque session token
pub const AUTH_HEADER: &str = "x-auth-token";

/// Verified identity attached to the request extensions.
/// Identity presence only; the account record is not re-fetched here.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Uuid,
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::MissingToken)
    }
}

/// Extract the token from the designated header
pub fn extract_token(headers: &HeaderMap) -> Result<String> {
    headers
        .get(AUTH_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or(AppError::MissingToken)
}

/// Token authorization middleware. Short-circuits the request with 401
/// before the protected handler executes on any failure.
pub async fn token_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = extract_token(req.headers())?;

    let claims = jwt_service.verify(&token)?;

    let account_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    req.extensions_mut().insert(AuthContext { account_id });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, "token_123".parse().unwrap());

        let token = extract_token(&headers).unwrap();
        assert_eq!(token, "token_123");
    }

    #[test]
    fn test_extract_token_missing() {
        let headers = HeaderMap::new();
        match extract_token(&headers) {
            Err(AppError::MissingToken) => {}
            other => panic!("expected MissingToken, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_token_empty_value() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, "".parse().unwrap());

        assert!(extract_token(&headers).is_err());
    }
}
