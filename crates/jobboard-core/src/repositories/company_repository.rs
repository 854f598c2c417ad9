//! Company repository trait (port)

use async_trait::async_trait;
use jobboard_shared::EntityId;

use crate::domain::{Company, CompanyWithEmployer, NewCompany};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Company>, DomainError>;
    async fn find_with_employer(&self, id: EntityId)
        -> Result<Option<CompanyWithEmployer>, DomainError>;
    /// Most recently created first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Company>, DomainError>;
    async fn list_by_employer(&self, employer_id: EntityId) -> Result<Vec<Company>, DomainError>;
    async fn update(&self, company: &Company) -> Result<Company, DomainError>;
}
