//! Account registry and session authentication
//! Orchestrates registration (uniqueness check, hashing, persistence,
//! token issuance) and login (lookup, hash comparison, token issuance).

use crate::{
    auth::{JwtService, PasswordHasher},
    avatar,
    error::{AppError, Result},
    models::{Account, LoginRequest, NewAccount, RegisterRequest},
    repository::AccountStore,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct AccountService {
    store: Arc<dyn AccountStore>,
    jwt_service: Arc<JwtService>,
    hasher: Arc<PasswordHasher>,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        jwt_service: Arc<JwtService>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            store,
            jwt_service,
            hasher,
        }
    }

    /// Register a new account and issue its first session token.
    /// Exactly one new row on success, none on any failure path.
    pub async fn register(&self, req: RegisterRequest) -> Result<String> {
        req.validated()?;

        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::DuplicateAccount);
        }

        let avatar_url = avatar::resolve(&req.email);

        let password_hash = self.hash_password(req.password).await?;

        // The pre-check above can race with a concurrent registration;
        // the store's unique constraint settles it (see repository).
        let account = self
            .store
            .create(NewAccount {
                name: req.name,
                email: req.email,
                avatar_url,
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id, "Account registered");

        self.jwt_service.issue(account.id)
    }

    /// Authenticate and issue a session token.
    ///
    /// An unknown email halts with the same `InvalidCredentials` as a
    /// wrong password, before any hash comparison runs.
    pub async fn login(&self, req: LoginRequest) -> Result<String> {
        req.validated()?;

        let Some(account) = self.store.find_by_email(&req.email).await? else {
            return Err(AppError::InvalidCredentials);
        };

        let matches = self
            .verify_password(req.password, account.password_hash.clone())
            .await?;

        if !matches {
            return Err(AppError::InvalidCredentials);
        }

        tracing::debug!(account_id = %account.id, "Login succeeded");

        self.jwt_service.issue(account.id)
    }

    /// Fetch the account behind a verified identity (identity probe)
    pub async fn account(&self, id: Uuid) -> Result<Account> {
        self.store.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// Argon2 is intentionally slow; run it off the async executor so
    /// one hashing request never stalls unrelated requests.
    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
    }
}
