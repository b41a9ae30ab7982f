//! Shared test fixtures: configuration, in-memory account store, and
//! application state wiring without a database.

use async_trait::async_trait;
use chrono::Utc;
use profile_service::{
    auth::{JwtService, PasswordHasher},
    config::{AppConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
    error::AppError,
    middleware::AppState,
    models::{Account, NewAccount},
    repository::AccountStore,
    services::AccountService,
};
use secrecy::Secret;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_32_characters_long!";

pub fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:3000".to_string(),
            graceful_shutdown_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: Secret::new("postgresql://localhost/test".to_string()),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 30,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
        },
        security: SecurityConfig {
            jwt_secret: Secret::new(TEST_SECRET.to_string()),
            token_exp_secs: 3600,
            // Minimum iterations keep the suites fast
            hash_cost: 1,
        },
    }
}

/// In-memory account store. Inserts are atomic under the lock, so email
/// uniqueness is enforced exactly like the Postgres unique constraint.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let mut accounts = self.accounts.lock().unwrap();

        if accounts.iter().any(|a| a.email == new_account.email) {
            return Err(AppError::DuplicateAccount);
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: new_account.name,
            email: new_account.email,
            avatar_url: new_account.avatar_url,
            password_hash: new_account.password_hash,
            created_at: Utc::now(),
        };

        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn create_test_state_with_store(store: Arc<dyn AccountStore>) -> Arc<AppState> {
    let config = create_test_config();

    let jwt_service = Arc::new(JwtService::from_config(&config).expect("jwt service"));
    let hasher = Arc::new(PasswordHasher::new(config.security.hash_cost).expect("hasher"));

    let account_service = Arc::new(AccountService::new(
        store.clone(),
        jwt_service.clone(),
        hasher,
    ));

    Arc::new(AppState {
        config,
        store,
        account_service,
        jwt_service,
    })
}

pub fn create_test_state() -> Arc<AppState> {
    create_test_state_with_store(Arc::new(InMemoryAccountStore::new()))
}
