//! Account record store
//! The core only needs create / find-by-email / find-by-id; everything
//! profile-shaped lives behind this seam in the external profile service.

pub mod account_repo;

pub use account_repo::PostgresAccountStore;

use crate::{
    error::Result,
    models::{Account, NewAccount},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Account record store contract
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account. The store assigns the id. A unique-key
    /// rejection on the email column must surface as `DuplicateAccount`;
    /// it is the backstop for the check-then-create registration race.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>>;

    /// Readiness probe against the backing store
    async fn ping(&self) -> Result<()>;
}
