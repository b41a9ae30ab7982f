//! Unified error model
//! Every failure path surfaces as an `AppError`; the HTTP rendering is
//! always `{"errors": [{"msg": ...}]}` with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

/// A single field-scoped error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    pub msg: String,
}

impl FieldMessage {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldMessage>),

    #[error("account already exists")]
    DuplicateAccount,

    /// Identical wording whether the email is unknown or the password is
    /// wrong, so callers cannot enumerate registered emails.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no token provided")]
    MissingToken,

    #[error("token rejected")]
    InvalidToken,

    #[error("token expired")]
    ExpiredToken,

    #[error("account not found")]
    NotFound,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::DuplicateAccount
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::MissingToken | AppError::InvalidToken | AppError::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing messages. Server-side errors render an opaque
    /// message; the detail stays in the logs.
    pub fn messages(&self) -> Vec<FieldMessage> {
        match self {
            AppError::Validation(messages) => messages.clone(),
            AppError::DuplicateAccount => vec![FieldMessage::new("User already exists")],
            AppError::InvalidCredentials => vec![FieldMessage::new("Invalid Credentials.")],
            AppError::MissingToken => {
                vec![FieldMessage::new("No token, authorization denied.")]
            }
            AppError::InvalidToken => vec![FieldMessage::new("Token is not valid.")],
            AppError::ExpiredToken => vec![FieldMessage::new("Token has expired.")],
            AppError::NotFound => vec![FieldMessage::new("Account not found.")],
            AppError::Config(_) | AppError::Database(_) | AppError::Internal(_) => {
                vec![FieldMessage::new("Server Error")]
            }
        }
    }

    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }
}

/// Error response DTO
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<FieldMessage>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), detail = %self, "Request failed");
        } else {
            tracing::debug!(code = self.code(), detail = %self, "Request rejected");
        }

        let body = ErrorResponse {
            errors: self.messages(),
        };

        (status, Json(body)).into_response()
    }
}
