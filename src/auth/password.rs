//! Password hashing and verification using Argon2id

use crate::error::{AppError, Result};
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Memory cost in KiB (OWASP interactive recommendation, 19 MiB).
const MEMORY_COST_KIB: u32 = 19_456;

/// Parallelism degree. Single lane keeps latency predictable per request.
const PARALLELISM: u32 = 1;

/// Password hasher with a configurable iteration count
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the given iteration count (t_cost)
    pub fn new(cost: u32) -> Result<Self> {
        let params = Params::new(MEMORY_COST_KIB, cost, PARALLELISM, None)
            .map_err(|e| AppError::Config(format!("Invalid Argon2 params: {}", e)))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        Ok(Self { argon2 })
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!("Failed to hash password: {:?}", e);
                AppError::Internal(format!("Failed to hash password: {}", e))
            })?
            .to_string();

        Ok(password_hash)
    }

    /// Verify a password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; only an unparseable stored hash is an
    /// error. The comparison is Argon2's own constant-time check.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            tracing::error!("Stored password hash is malformed: {:?}", e);
            AppError::Internal(format!("Failed to parse password hash: {}", e))
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => {
                tracing::error!("Password verification failed: {:?}", e);
                Err(AppError::Internal(format!(
                    "Password verification failed: {}",
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HASH_COST;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(DEFAULT_HASH_COST).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let password = "correct horse battery";

        let hash = hasher.hash(password).unwrap();
        assert!(hash.contains("$argon2"));
        assert!(hasher.verify(password, &hash).unwrap());
    }

    #[test]
    fn test_verify_fails_with_wrong_password() {
        let hasher = hasher();
        let hash = hasher.hash("secret").unwrap();

        assert!(!hasher.verify("not-the-secret", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_different_each_time() {
        let hasher = hasher();
        let password = "secret";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Different salts, different hashes
        assert_ne!(hash1, hash2);

        assert!(hasher.verify(password, &hash1).unwrap());
        assert!(hasher.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_malformed_stored_hash_is_internal_error() {
        let hasher = hasher();
        assert!(hasher.verify("secret", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_zero_cost_is_rejected() {
        assert!(PasswordHasher::new(0).is_err());
    }
}
