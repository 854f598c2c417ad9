use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::domain::{EmployerJob, Job, JobFilter, JobWithRelations, NewJob};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::JobRepository;
use jobboard_shared::EntityId;

use super::{newest_first, next_id, MemoryStore};

#[async_trait]
impl JobRepository for MemoryStore {
    async fn create(&self, job: &NewJob) -> Result<Job, DomainError> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&job.employer_id) {
            return Err(DomainError::UserNotFound);
        }
        if job.company_id.is_some_and(|id| !tables.companies.contains_key(&id)) {
            return Err(DomainError::CompanyNotFound);
        }

        let now = Utc::now();
        let created = Job {
            id: next_id(&mut tables.seq.jobs),
            title: job.title.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            salary: job.salary.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            employer_id: job.employer_id,
            company_id: job.company_id,
            created_at: now,
            updated_at: now,
        };
        tables.jobs.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Job>, DomainError> {
        Ok(self.tables.read().jobs.get(&id).cloned())
    }

    async fn find_with_relations(
        &self,
        id: EntityId,
    ) -> Result<Option<JobWithRelations>, DomainError> {
        let tables = self.tables.read();
        Ok(tables.jobs.get(&id).map(|job| tables.listing(job)))
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobWithRelations>, DomainError> {
        let tables = self.tables.read();
        let search = filter.search_term();
        let mut listings: Vec<JobWithRelations> = tables
            .jobs
            .values()
            .filter(|j| filter.company_id.is_none() || j.company_id == filter.company_id)
            .map(|j| tables.listing(j))
            .filter(|l| search.map_or(true, |term| l.matches_search(term)))
            .collect();
        newest_first(&mut listings, |l| (l.job.created_at, l.job.id));
        Ok(listings)
    }

    async fn list_by_employer(
        &self,
        employer_id: EntityId,
    ) -> Result<Vec<EmployerJob>, DomainError> {
        let tables = self.tables.read();
        let mut jobs: Vec<EmployerJob> = tables
            .jobs
            .values()
            .filter(|j| j.employer_id == employer_id)
            .map(|j| EmployerJob {
                job: j.clone(),
                application_count: tables
                    .applications
                    .values()
                    .filter(|a| a.job_id == j.id)
                    .count() as i64,
            })
            .collect();
        newest_first(&mut jobs, |e| (e.job.created_at, e.job.id));
        Ok(jobs)
    }

    async fn update(&self, job: &Job) -> Result<Job, DomainError> {
        let mut tables = self.tables.write();
        let stored = tables.jobs.get_mut(&job.id).ok_or(DomainError::JobNotFound)?;
        *stored = Job {
            employer_id: stored.employer_id,
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..job.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write();
        if tables.jobs.remove(&id).is_none() {
            return Ok(false);
        }
        tables.applications.retain(|_, a| a.job_id != id);
        Ok(true)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.tables.read().jobs.len() as i64)
    }
}
