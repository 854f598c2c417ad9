//! Applying to jobs and moving applications through their workflow

use std::sync::Arc;

use jobboard_shared::utils::non_blank;
use jobboard_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{
    Actor, Application, ApplicationStatus, ApplicationWithCandidate, ApplicationWithJob,
    NewApplication,
};
use crate::dto::{ApplyRequest, UpdateStatusRequest};
use crate::error::DomainError;
use crate::repositories::{ApplicationRepository, JobRepository};

#[derive(Clone)]
pub struct ApplicationService {
    applications: Arc<dyn ApplicationRepository>,
    jobs: Arc<dyn JobRepository>,
}

impl ApplicationService {
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        jobs: Arc<dyn JobRepository>,
    ) -> Self {
        Self { applications, jobs }
    }

    pub async fn apply(
        &self,
        actor: &Actor,
        request: ApplyRequest,
    ) -> Result<Application, DomainError> {
        let job_id = request
            .job_id
            .ok_or_else(|| DomainError::validation("Job ID is required"))?;

        if self.jobs.find_by_id(job_id).await?.is_none() {
            return Err(DomainError::JobNotFound);
        }

        if self
            .applications
            .find_by_job_and_candidate(job_id, actor.user_id)
            .await?
            .is_some()
        {
            warn!(job_id, candidate_id = actor.user_id, "Duplicate application refused");
            return Err(DomainError::AlreadyApplied);
        }

        // The unique index still guards the window between check and insert.
        let application = self
            .applications
            .create(&NewApplication {
                job_id,
                candidate_id: actor.user_id,
                resume_url: non_blank(request.resume_url),
                cover_letter: non_blank(request.cover_letter),
            })
            .await?;

        info!(
            application_id = application.id,
            job_id,
            candidate_id = actor.user_id,
            "Application submitted"
        );
        Ok(application)
    }

    pub async fn list_mine(&self, actor: &Actor) -> Result<Vec<ApplicationWithJob>, DomainError> {
        self.applications.list_by_candidate(actor.user_id).await
    }

    pub async fn list_for_employer(
        &self,
        actor: &Actor,
    ) -> Result<Vec<ApplicationWithCandidate>, DomainError> {
        self.applications.list_by_employer(actor.user_id).await
    }

    pub async fn list_for_job(
        &self,
        actor: &Actor,
        job_id: EntityId,
    ) -> Result<Vec<ApplicationWithCandidate>, DomainError> {
        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or(DomainError::JobNotFound)?;

        if !job.is_owned_by(actor.user_id) {
            warn!(
                job_id,
                user_id = actor.user_id,
                "Application listing refused: not the job owner"
            );
            return Err(DomainError::forbidden(
                "Not authorized to view applications for this job",
            ));
        }

        self.applications.list_by_job(job_id).await
    }

    pub async fn update_status(
        &self,
        actor: &Actor,
        id: EntityId,
        request: UpdateStatusRequest,
    ) -> Result<Application, DomainError> {
        let status = non_blank(request.status)
            .as_deref()
            .and_then(ApplicationStatus::from_str)
            .ok_or_else(|| {
                DomainError::validation(
                    "Invalid status. Must be one of APPLIED, REVIEWING, INTERVIEW, OFFER, REJECTED",
                )
            })?;

        let application = self
            .applications
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ApplicationNotFound)?;

        let owns_job = self
            .jobs
            .find_by_id(application.job_id)
            .await?
            .is_some_and(|job| job.is_owned_by(actor.user_id));
        if !owns_job {
            warn!(
                application_id = id,
                user_id = actor.user_id,
                "Status change refused: not the job owner"
            );
            return Err(DomainError::forbidden(
                "Not authorized to update this application",
            ));
        }

        let updated = self.applications.update_status(id, status).await?;
        info!(application_id = id, status = status.as_str(), "Application status updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Job, JobType, Role};
    use crate::repositories::{MockApplicationRepository, MockJobRepository};
    use chrono::Utc;

    fn candidate() -> Actor {
        Actor::new(20, Role::Candidate)
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
            company_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn application(id: i32, job_id: i32, candidate_id: i32) -> Application {
        let now = Utc::now();
        Application {
            id,
            job_id,
            candidate_id,
            status: ApplicationStatus::Applied,
            resume_url: None,
            cover_letter: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn jobs_owned_by(employer_id: i32) -> MockJobRepository {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id()
            .returning(move |id| Ok(Some(job(id, employer_id))));
        jobs
    }

    #[tokio::test]
    async fn test_apply_creates_application() {
        let mut applications = MockApplicationRepository::new();
        applications
            .expect_find_by_job_and_candidate()
            .returning(|_, _| Ok(None));
        applications
            .expect_create()
            .withf(|a| a.job_id == 3 && a.candidate_id == 20 && a.cover_letter.is_some())
            .times(1)
            .returning(|a| Ok(application(1, a.job_id, a.candidate_id)));

        let service = ApplicationService::new(Arc::new(applications), Arc::new(jobs_owned_by(7)));
        let created = service
            .apply(
                &candidate(),
                ApplyRequest {
                    job_id: Some(3),
                    cover_letter: Some("Hire me".into()),
                    resume_url: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(created.status, ApplicationStatus::Applied);
    }

    #[tokio::test]
    async fn test_apply_twice_is_rejected() {
        let mut applications = MockApplicationRepository::new();
        applications
            .expect_find_by_job_and_candidate()
            .returning(|job_id, candidate_id| Ok(Some(application(1, job_id, candidate_id))));
        applications.expect_create().never();

        let service = ApplicationService::new(Arc::new(applications), Arc::new(jobs_owned_by(7)));
        let err = service
            .apply(
                &candidate(),
                ApplyRequest {
                    job_id: Some(3),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Already applied to this job");
    }

    #[tokio::test]
    async fn test_apply_to_missing_job() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id().returning(|_| Ok(None));
        let service = ApplicationService::new(
            Arc::new(MockApplicationRepository::new()),
            Arc::new(jobs),
        );

        let err = service
            .apply(
                &candidate(),
                ApplyRequest {
                    job_id: Some(404),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::JobNotFound));

        let err = service
            .apply(&candidate(), ApplyRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Job ID is required");
    }

    #[tokio::test]
    async fn test_update_status_checks_job_owner() {
        let mut applications = MockApplicationRepository::new();
        applications
            .expect_find_by_id()
            .returning(|id| Ok(Some(application(id, 3, 20))));
        applications
            .expect_update_status()
            .times(1)
            .returning(|id, status| {
                let mut a = application(id, 3, 20);
                a.status = status;
                Ok(a)
            });
        let service = ApplicationService::new(Arc::new(applications), Arc::new(jobs_owned_by(7)));
        let request = UpdateStatusRequest {
            status: Some("INTERVIEW".into()),
        };

        let err = service
            .update_status(&Actor::new(8, Role::Employer), 1, request.clone())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not authorized to update this application");

        let updated = service
            .update_status(&Actor::new(7, Role::Employer), 1, request)
            .await
            .unwrap();
        assert_eq!(updated.status, ApplicationStatus::Interview);
    }

    #[tokio::test]
    async fn test_update_status_rejects_unknown_status() {
        let service = ApplicationService::new(
            Arc::new(MockApplicationRepository::new()),
            Arc::new(MockJobRepository::new()),
        );
        let err = service
            .update_status(
                &Actor::new(7, Role::Employer),
                1,
                UpdateStatusRequest {
                    status: Some("HIRED".into()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_list_for_job_requires_owner() {
        let mut applications = MockApplicationRepository::new();
        applications.expect_list_by_job().returning(|_| Ok(vec![]));
        let service = ApplicationService::new(Arc::new(applications), Arc::new(jobs_owned_by(7)));

        let err = service
            .list_for_job(&Actor::new(8, Role::Employer), 3)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let listed = service
            .list_for_job(&Actor::new(7, Role::Employer), 3)
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}
