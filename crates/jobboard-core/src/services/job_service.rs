//! Job posting, listing and ownership checks

use std::sync::Arc;

use chrono::Utc;
use jobboard_shared::utils::non_blank;
use jobboard_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{Actor, EmployerJob, Job, JobFilter, JobType, JobWithRelations, NewJob};
use crate::dto::{CreateJobRequest, UpdateJobRequest};
use crate::error::DomainError;
use crate::repositories::{CompanyRepository, JobRepository};

const FOREIGN_COMPANY: &str = "You can only post jobs for your own companies";

#[derive(Clone)]
pub struct JobService {
    jobs: Arc<dyn JobRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl JobService {
    pub fn new(jobs: Arc<dyn JobRepository>, companies: Arc<dyn CompanyRepository>) -> Self {
        Self { jobs, companies }
    }

    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<JobWithRelations>, DomainError> {
        self.jobs.list(filter).await
    }

    pub async fn get(&self, id: EntityId) -> Result<JobWithRelations, DomainError> {
        self.jobs
            .find_with_relations(id)
            .await?
            .ok_or(DomainError::JobNotFound)
    }

    pub async fn list_for_employer(&self, actor: &Actor) -> Result<Vec<EmployerJob>, DomainError> {
        self.jobs.list_by_employer(actor.user_id).await
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateJobRequest,
    ) -> Result<Job, DomainError> {
        let (title, description, location) = match (
            non_blank(request.title),
            non_blank(request.description),
            non_blank(request.location),
        ) {
            (Some(t), Some(d), Some(l)) => (t, d, l),
            _ => {
                return Err(DomainError::validation(
                    "Title, description, and location are required",
                ))
            }
        };

        let job_type = parse_job_type(request.job_type)?.unwrap_or_default();
        let company_id = request
            .company_id
            .ok_or_else(|| DomainError::validation("Company is required"))?;
        self.ensure_company_owned(company_id, actor.user_id).await?;

        let job = self
            .jobs
            .create(&NewJob {
                title,
                description,
                requirements: non_blank(request.requirements),
                salary: non_blank(request.salary),
                location,
                job_type,
                employer_id: actor.user_id,
                company_id: Some(company_id),
            })
            .await?;

        info!(job_id = job.id, employer_id = actor.user_id, "Job posted");
        Ok(job)
    }

    /// Owner-only partial update
    pub async fn update(
        &self,
        actor: &Actor,
        id: EntityId,
        request: UpdateJobRequest,
    ) -> Result<Job, DomainError> {
        let mut job = self.jobs.find_by_id(id).await?.ok_or(DomainError::JobNotFound)?;
        if !job.is_owned_by(actor.user_id) {
            warn!(job_id = id, user_id = actor.user_id, "Job update refused: not the owner");
            return Err(DomainError::forbidden("Not authorized to update this job"));
        }

        if let Some(company_id) = request.company_id {
            self.ensure_company_owned(company_id, job.employer_id).await?;
            job.company_id = Some(company_id);
        }
        if let Some(title) = request.title {
            job.title = required(title)?;
        }
        if let Some(description) = request.description {
            job.description = required(description)?;
        }
        if let Some(location) = request.location {
            job.location = required(location)?;
        }
        if let Some(requirements) = request.requirements {
            job.requirements = non_blank(Some(requirements));
        }
        if let Some(salary) = request.salary {
            job.salary = non_blank(Some(salary));
        }
        if let Some(job_type) = parse_job_type(request.job_type)? {
            job.job_type = job_type;
        }
        job.updated_at = Utc::now();

        let job = self.jobs.update(&job).await?;
        info!(job_id = job.id, "Job updated");
        Ok(job)
    }

    /// Owner or admin only
    pub async fn delete(&self, actor: &Actor, id: EntityId) -> Result<(), DomainError> {
        let job = self.jobs.find_by_id(id).await?.ok_or(DomainError::JobNotFound)?;
        if !job.is_owned_by(actor.user_id) && !actor.is_admin() {
            warn!(job_id = id, user_id = actor.user_id, "Job delete refused: not the owner");
            return Err(DomainError::forbidden("Not authorized to delete this job"));
        }

        if !self.jobs.delete(id).await? {
            return Err(DomainError::JobNotFound);
        }
        info!(job_id = id, deleted_by = actor.user_id, "Job deleted");
        Ok(())
    }

    async fn ensure_company_owned(
        &self,
        company_id: EntityId,
        employer_id: EntityId,
    ) -> Result<(), DomainError> {
        match self.companies.find_by_id(company_id).await? {
            Some(company) if company.is_owned_by(employer_id) => Ok(()),
            _ => {
                warn!(company_id, employer_id, "Job refused: company not owned by employer");
                Err(DomainError::forbidden(FOREIGN_COMPANY))
            }
        }
    }
}

fn parse_job_type(raw: Option<String>) -> Result<Option<JobType>, DomainError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(raw) => JobType::from_str(&raw).map(Some).ok_or_else(|| {
            DomainError::validation(
                "Invalid job type. Must be one of FULL_TIME, PART_TIME, CONTRACT, \
                 INTERNSHIP, REMOTE",
            )
        }),
    }
}

fn required(value: String) -> Result<String, DomainError> {
    non_blank(Some(value))
        .ok_or_else(|| DomainError::validation("Title, description, and location cannot be empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Company, Role};
    use crate::repositories::{MockCompanyRepository, MockJobRepository};

    fn employer(id: i32) -> Actor {
        Actor::new(id, Role::Employer)
    }

    fn company(id: i32, employer_id: i32) -> Company {
        let now = Utc::now();
        Company {
            id,
            name: "Tech Corp".into(),
            description: None,
            website: None,
            location: None,
            logo: None,
            employer_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn job(id: i32, employer_id: i32) -> Job {
        let now = Utc::now();
        Job {
            id,
            title: "Backend Engineer".into(),
            description: "Build APIs".into(),
            requirements: None,
            salary: None,
            location: "Remote".into(),
            job_type: JobType::FullTime,
            employer_id,
            company_id: Some(1),
            created_at: now,
            updated_at: now,
        }
    }

    fn from_new(new_job: &NewJob) -> Job {
        let mut created = job(10, new_job.employer_id);
        created.title = new_job.title.clone();
        created.job_type = new_job.job_type;
        created.company_id = new_job.company_id;
        created
    }

    fn create_request(company_id: Option<i32>) -> CreateJobRequest {
        CreateJobRequest {
            title: Some("Backend Engineer".into()),
            description: Some("Build APIs".into()),
            location: Some("Remote".into()),
            job_type: Some("CONTRACT".into()),
            company_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_job_for_own_company() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_create()
            .withf(|j| {
                j.employer_id == 7 && j.company_id == Some(1) && j.job_type == JobType::Contract
            })
            .times(1)
            .returning(|j| Ok(from_new(j)));
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .returning(|id| Ok(Some(company(id, 7))));

        let service = JobService::new(Arc::new(jobs), Arc::new(companies));
        let created = service
            .create(&employer(7), create_request(Some(1)))
            .await
            .unwrap();
        assert_eq!(created.employer_id, 7);
    }

    #[tokio::test]
    async fn test_create_job_for_foreign_company_is_forbidden() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_create().never();
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .returning(|id| Ok(Some(company(id, 99))));

        let service = JobService::new(Arc::new(jobs), Arc::new(companies));
        let err = service
            .create(&employer(7), create_request(Some(1)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), FOREIGN_COMPANY);
    }

    #[tokio::test]
    async fn test_create_job_requires_company_and_fields() {
        let service = JobService::new(
            Arc::new(MockJobRepository::new()),
            Arc::new(MockCompanyRepository::new()),
        );

        let err = service
            .create(&employer(7), create_request(None))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Company is required");

        let mut request = create_request(Some(1));
        request.location = None;
        let err = service.create(&employer(7), request).await.unwrap_err();
        assert_eq!(err.to_string(), "Title, description, and location are required");

        let mut request = create_request(Some(1));
        request.job_type = Some("GIG".into());
        let err = service.create(&employer(7), request).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_job_owner_admin_and_stranger() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id().returning(|id| Ok(Some(job(id, 7))));
        jobs.expect_delete().times(2).returning(|_| Ok(true));
        let service = JobService::new(Arc::new(jobs), Arc::new(MockCompanyRepository::new()));

        let err = service.delete(&employer(8), 3).await.unwrap_err();
        assert_eq!(err.to_string(), "Not authorized to delete this job");

        service.delete(&employer(7), 3).await.unwrap();
        service.delete(&Actor::new(1, Role::Admin), 3).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_job() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id().returning(|_| Ok(None));
        let service = JobService::new(Arc::new(jobs), Arc::new(MockCompanyRepository::new()));

        let err = service.delete(&employer(7), 3).await.unwrap_err();
        assert!(matches!(err, DomainError::JobNotFound));
    }

    #[tokio::test]
    async fn test_update_job_changes_only_supplied_fields() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id().returning(|id| Ok(Some(job(id, 7))));
        jobs.expect_update().returning(|j| Ok(j.clone()));
        let service = JobService::new(Arc::new(jobs), Arc::new(MockCompanyRepository::new()));

        let updated = service
            .update(
                &employer(7),
                3,
                UpdateJobRequest {
                    salary: Some("$120k".into()),
                    job_type: Some("PART_TIME".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Backend Engineer");
        assert_eq!(updated.salary.as_deref(), Some("$120k"));
        assert_eq!(updated.job_type, JobType::PartTime);

        let err = service
            .update(&employer(8), 3, UpdateJobRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not authorized to update this job");
    }
}
