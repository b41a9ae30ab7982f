//! Route registration
//! Assembles public and protected routes and applies middleware

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{auth::middleware::token_auth_middleware, handlers, middleware::AppState};

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Public endpoints
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/users", post(handlers::accounts::register))
        .route("/api/auth", post(handlers::sessions::login));

    // Protected endpoints behind the token authorizer; the gate runs
    // before any handler and short-circuits the request on failure.
    let protected_routes = Router::new()
        .route("/api/auth", get(handlers::sessions::current_account))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_service.clone(),
            token_auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(
            crate::middleware::request_tracking_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
