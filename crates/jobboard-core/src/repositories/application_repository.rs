//! Application repository trait (port)

use async_trait::async_trait;
use jobboard_shared::EntityId;

use crate::domain::{
    Application, ApplicationStatus, ApplicationWithCandidate, ApplicationWithJob, NewApplication,
};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Fails with `AlreadyApplied` when the (job, candidate) pair exists.
    async fn create(&self, application: &NewApplication) -> Result<Application, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Application>, DomainError>;
    async fn find_by_job_and_candidate(
        &self,
        job_id: EntityId,
        candidate_id: EntityId,
    ) -> Result<Option<Application>, DomainError>;
    /// The candidate's applications, newest first, with the full job listing.
    async fn list_by_candidate(&self, candidate_id: EntityId)
        -> Result<Vec<ApplicationWithJob>, DomainError>;
    /// Applications to any of the employer's jobs, newest first.
    async fn list_by_employer(&self, employer_id: EntityId)
        -> Result<Vec<ApplicationWithCandidate>, DomainError>;
    /// Applications to a single job, newest first, without the job summary.
    async fn list_by_job(&self, job_id: EntityId)
        -> Result<Vec<ApplicationWithCandidate>, DomainError>;
    async fn update_status(
        &self,
        id: EntityId,
        status: ApplicationStatus,
    ) -> Result<Application, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
