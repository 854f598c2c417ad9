//! User repository trait (port)

use async_trait::async_trait;
use jobboard_shared::EntityId;

use crate::domain::{NewUser, User};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError>;
    /// Lookup by an already normalized (lower-cased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
    /// Persists every mutable column, including role and password hash.
    async fn update(&self, user: &User) -> Result<User, DomainError>;
    /// Returns false when no row matched. Cascades to owned rows.
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
    /// All users, newest first.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
