//! Session token issuance and verification
//! Stateless HS256 tokens binding an account id to an expiry instant

use crate::{config::AppConfig, error::{AppError, Result}};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// Token codec holding the process-wide signing keys
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_exp_secs: u64,
}

impl JwtService {
    /// Create the codec from config. The secret is loaded exactly once
    /// here; it is never logged and never leaves this struct.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let secret = config.security.jwt_secret.expose_secret();

        // HS256 needs a real secret behind it
        if secret.len() < 32 {
            return Err(AppError::Config(
                "JWT secret too short (min 32 chars)".to_string(),
            ));
        }

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // Expiry is enforced exactly, no leeway
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding_key,
            decoding_key,
            validation,
            token_exp_secs: config.security.token_exp_secs,
        })
    }

    /// Issue a token asserting the given account id
    pub fn issue(&self, subject: Uuid) -> Result<String> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.token_exp_secs as i64);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode session token: {:?}", e);
            AppError::Internal(format!("Failed to encode session token: {}", e))
        })
    }

    /// Verify a token and return its claims. The signature is checked
    /// before any embedded claim is trusted.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {:?}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AppError::ExpiredToken,
                    _ => AppError::InvalidToken,
                }
            })
    }
}
