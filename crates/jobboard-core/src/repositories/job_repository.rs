//! Job repository trait (port)

use async_trait::async_trait;
use jobboard_shared::EntityId;

use crate::domain::{EmployerJob, Job, JobFilter, JobWithRelations, NewJob};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &NewJob) -> Result<Job, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Job>, DomainError>;
    async fn find_with_relations(&self, id: EntityId)
        -> Result<Option<JobWithRelations>, DomainError>;
    /// Public listing, newest first, narrowed by the filter.
    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobWithRelations>, DomainError>;
    /// The employer's jobs, newest first, each with its application count.
    async fn list_by_employer(&self, employer_id: EntityId)
        -> Result<Vec<EmployerJob>, DomainError>;
    async fn update(&self, job: &Job) -> Result<Job, DomainError>;
    /// Returns false when no row matched. Cascades to applications.
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
