//! Account domain models

use crate::error::{AppError, FieldMessage, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Account row. The password hash never leaves this type through a
/// response; handlers serialize `AccountResponse` instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new account; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub password_hash: String,
}

/// Registration input
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    #[validate(email(message = "Input a valid E-Mail."))]
    pub email: String,

    #[validate(length(min = 5, message = "Password has to be 5 char minimum"))]
    pub password: String,
}

impl RegisterRequest {
    /// Run all registration rules, collecting every failing message
    pub fn validated(&self) -> Result<()> {
        self.validate()
            .map_err(|e| AppError::Validation(collect_messages(&e, &["name", "email", "password"])))
    }
}

/// Login input. Password is a presence check only; the length rule is
/// deliberately asymmetric with registration.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Input a valid E-Mail."))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

impl LoginRequest {
    pub fn validated(&self) -> Result<()> {
        self.validate()
            .map_err(|e| AppError::Validation(collect_messages(&e, &["email", "password"])))
    }
}

/// Account response (without the password hash)
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            avatar_url: account.avatar_url,
            created_at: account.created_at,
        }
    }
}

/// Successful registration/login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Flatten validator output into field messages, in declared field order
fn collect_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<FieldMessage> {
    let by_field = errors.field_errors();
    let mut messages = Vec::new();

    for field in fields {
        if let Some(field_errors) = by_field.get(*field) {
            for error in field_errors.iter() {
                let msg = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                messages.push(FieldMessage::new(msg));
            }
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_valid_input_passes() {
        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validated().is_ok());
    }

    #[test]
    fn test_register_collects_all_failures() {
        let req = RegisterRequest {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "abc".to_string(),
        };

        match req.validated() {
            Err(AppError::Validation(messages)) => {
                assert_eq!(messages.len(), 3);
                assert_eq!(messages[0].msg, "Name is required.");
                assert_eq!(messages[1].msg, "Input a valid E-Mail.");
                assert_eq!(messages[2].msg, "Password has to be 5 char minimum");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_register_password_boundary() {
        let mut req = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "abcd".to_string(),
        };
        assert!(req.validated().is_err());

        req.password = "abcde".to_string();
        assert!(req.validated().is_ok());
    }

    #[test]
    fn test_login_has_no_password_length_rule() {
        let req = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "abc".to_string(),
        };
        assert!(req.validated().is_ok());
    }

    #[test]
    fn test_login_requires_password_presence() {
        let req = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "".to_string(),
        };

        match req.validated() {
            Err(AppError::Validation(messages)) => {
                assert_eq!(messages, vec![FieldMessage::new("Password is required.")]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_account_response_omits_password_hash() {
        let account = Account {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            created_at: Utc::now(),
        };

        let response = AccountResponse::from(account);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }
}
