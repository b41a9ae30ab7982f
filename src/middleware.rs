//! HTTP middleware and shared application state

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Shared application state.
///
/// Everything in here is immutable after startup and cheap to share:
/// services are Arc-wrapped and the store handle is internally pooled.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::AppConfig,
    pub store: Arc<dyn crate::repository::AccountStore>,
    pub account_service: Arc<crate::services::AccountService>,
    pub jwt_service: Arc<crate::auth::JwtService>,
}

/// Request tracking middleware: a span per request with a generated
/// request id, plus latency/status metrics.
pub async fn request_tracking_middleware(req: Request, next: Next) -> Response {
    let request_id = extract_or_generate_request_id(req.headers());
    let method = req.method().to_string();
    let uri = req.uri().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    async move {
        let start = Instant::now();

        let response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status().as_u16();

        metrics::counter!("http.requests", "status" => status.to_string()).increment(1);
        metrics::histogram!("http.request.duration_secs").record(elapsed.as_secs_f64());

        tracing::info!(status = status, elapsed_ms = elapsed.as_millis() as u64, "Request completed");

        response
    }
    .instrument(span)
    .await
}

/// Reuse an upstream x-request-id when present
fn extract_or_generate_request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_reused_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "req-42".parse().unwrap());

        assert_eq!(extract_or_generate_request_id(&headers), "req-42");
    }

    #[test]
    fn test_request_id_generated_when_absent() {
        let headers = HeaderMap::new();
        let id = extract_or_generate_request_id(&headers);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
