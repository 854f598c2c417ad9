use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::domain::{
    Application, ApplicationStatus, ApplicationWithCandidate, ApplicationWithJob, NewApplication,
};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::ApplicationRepository;
use jobboard_shared::EntityId;

use super::{newest_first, next_id, MemoryStore};

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn create(&self, application: &NewApplication) -> Result<Application, DomainError> {
        let mut tables = self.tables.write();
        if !tables.jobs.contains_key(&application.job_id) {
            return Err(DomainError::JobNotFound);
        }
        if tables.applications.values().any(|a| {
            a.job_id == application.job_id && a.candidate_id == application.candidate_id
        }) {
            return Err(DomainError::AlreadyApplied);
        }

        let now = Utc::now();
        let created = Application {
            id: next_id(&mut tables.seq.applications),
            job_id: application.job_id,
            candidate_id: application.candidate_id,
            status: ApplicationStatus::default(),
            resume_url: application.resume_url.clone(),
            cover_letter: application.cover_letter.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.applications.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Application>, DomainError> {
        Ok(self.tables.read().applications.get(&id).cloned())
    }

    async fn find_by_job_and_candidate(
        &self,
        job_id: EntityId,
        candidate_id: EntityId,
    ) -> Result<Option<Application>, DomainError> {
        Ok(self
            .tables
            .read()
            .applications
            .values()
            .find(|a| a.job_id == job_id && a.candidate_id == candidate_id)
            .cloned())
    }

    async fn list_by_candidate(
        &self,
        candidate_id: EntityId,
    ) -> Result<Vec<ApplicationWithJob>, DomainError> {
        let tables = self.tables.read();
        let mut applications: Vec<ApplicationWithJob> = tables
            .applications
            .values()
            .filter(|a| a.candidate_id == candidate_id)
            .map(|a| ApplicationWithJob {
                application: a.clone(),
                job: tables.jobs.get(&a.job_id).map(|j| tables.listing(j)),
            })
            .collect();
        newest_first(&mut applications, |a| {
            (a.application.created_at, a.application.id)
        });
        Ok(applications)
    }

    async fn list_by_employer(
        &self,
        employer_id: EntityId,
    ) -> Result<Vec<ApplicationWithCandidate>, DomainError> {
        let tables = self.tables.read();
        let mut applications: Vec<ApplicationWithCandidate> = tables
            .applications
            .values()
            .filter(|a| {
                tables
                    .jobs
                    .get(&a.job_id)
                    .is_some_and(|j| j.employer_id == employer_id)
            })
            .map(|a| tables.candidate_view(a, true))
            .collect();
        newest_first(&mut applications, |a| {
            (a.application.created_at, a.application.id)
        });
        Ok(applications)
    }

    async fn list_by_job(
        &self,
        job_id: EntityId,
    ) -> Result<Vec<ApplicationWithCandidate>, DomainError> {
        let tables = self.tables.read();
        let mut applications: Vec<ApplicationWithCandidate> = tables
            .applications
            .values()
            .filter(|a| a.job_id == job_id)
            .map(|a| tables.candidate_view(a, false))
            .collect();
        newest_first(&mut applications, |a| {
            (a.application.created_at, a.application.id)
        });
        Ok(applications)
    }

    async fn update_status(
        &self,
        id: EntityId,
        status: ApplicationStatus,
    ) -> Result<Application, DomainError> {
        let mut tables = self.tables.write();
        let stored = tables
            .applications
            .get_mut(&id)
            .ok_or(DomainError::ApplicationNotFound)?;
        stored.set_status(status);
        Ok(stored.clone())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.tables.read().applications.len() as i64)
    }
}
