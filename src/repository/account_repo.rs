//! PostgreSQL account store

use crate::{
    error::{AppError, Result},
    models::{Account, NewAccount},
    repository::AccountStore,
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresAccountStore {
    db: PgPool,
}

impl PostgresAccountStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, name, email, avatar_url, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, avatar_url, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_account.name)
        .bind(&new_account.email)
        .bind(&new_account.avatar_url)
        .bind(&new_account.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(translate_insert_error)?;

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, avatar_url, password_hash, created_at \
             FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, avatar_url, password_hash, created_at \
             FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(account)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }
}

/// Two concurrent registrations can both pass the pre-check; the unique
/// constraint on email rejects the loser and we report it the same way
/// as the pre-check instead of surfacing a raw storage error.
fn translate_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::DuplicateAccount;
        }
    }
    AppError::Database(e)
}
