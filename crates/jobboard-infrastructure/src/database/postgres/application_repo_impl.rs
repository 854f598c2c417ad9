// ============================================================================
// Job Board Infrastructure - PostgreSQL Application Repository
// File: crates/jobboard-infrastructure/src/database/postgres/application_repo_impl.rs
// ============================================================================

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use jobboard_core::domain::{
    Application, ApplicationStatus, ApplicationWithCandidate, ApplicationWithJob,
    CandidateSummary, JobSummary, JobType, JobWithRelations, NewApplication, Profile,
};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::ApplicationRepository;
use jobboard_shared::EntityId;

use super::rows::{job_listing_select, ApplicationRow, JobListingRow, ProfileRow, PROFILE_COLUMNS};
use super::{db_error, unique_violation};

const APPLICATION_COLUMNS: &str = "a.id, a.job_id, a.candidate_id, a.status, a.resume_url, \
     a.cover_letter, a.created_at, a.updated_at";

pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn profiles_for(&self, user_ids: Vec<i32>) -> Result<HashMap<i32, Profile>, DomainError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<ProfileRow> = sqlx::query_as(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ANY($1)"
        ))
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("loading candidate profiles"))?;

        Ok(rows
            .into_iter()
            .map(|r| (r.user_id, Profile::from(r)))
            .collect())
    }

    /// Attaches candidate profiles; `with_job` keeps the job summary.
    async fn with_candidates(
        &self,
        rows: Vec<CandidateApplicationRow>,
        with_job: bool,
    ) -> Result<Vec<ApplicationWithCandidate>, DomainError> {
        let candidate_ids = rows.iter().map(|r| r.application.candidate_id).collect();
        let profiles = self.profiles_for(candidate_ids).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let application: Application = r.application.into();
                let candidate = match (r.candidate_name, r.candidate_email) {
                    (Some(name), Some(email)) => Some(CandidateSummary {
                        id: application.candidate_id,
                        name,
                        email,
                        profile: profiles.get(&application.candidate_id).cloned(),
                    }),
                    _ => None,
                };
                let job = with_job.then(|| JobSummary {
                    id: application.job_id,
                    title: r.job_title,
                    location: r.job_location,
                    job_type: JobType::from_str(&r.job_kind).unwrap_or_default(),
                });
                ApplicationWithCandidate {
                    application,
                    job,
                    candidate,
                }
            })
            .collect())
    }
}

/// Application joined with its job summary and candidate contact
#[derive(Debug, FromRow)]
struct CandidateApplicationRow {
    #[sqlx(flatten)]
    pub application: ApplicationRow,
    pub job_title: String,
    pub job_location: String,
    pub job_kind: String,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
}

fn candidate_application_select() -> String {
    format!(
        r#"
        SELECT {APPLICATION_COLUMNS},
               j.title AS job_title, j.location AS job_location, j.job_type AS job_kind,
               u.name AS candidate_name, u.email AS candidate_email
        FROM applications a
        JOIN jobs j ON j.id = a.job_id
        LEFT JOIN users u ON u.id = a.candidate_id
        "#
    )
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn create(&self, application: &NewApplication) -> Result<Application, DomainError> {
        let row: ApplicationRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO applications AS a (job_id, candidate_id, status, resume_url, cover_letter)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(application.job_id)
        .bind(application.candidate_id)
        .bind(ApplicationStatus::default().as_str())
        .bind(&application.resume_url)
        .bind(&application.cover_letter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            if unique_violation(&e).is_some() {
                return DomainError::AlreadyApplied;
            }
            error!("Database error creating application: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Application created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Application>, DomainError> {
        let row: Option<ApplicationRow> = sqlx::query_as(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications a WHERE a.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding application"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_job_and_candidate(
        &self,
        job_id: EntityId,
        candidate_id: EntityId,
    ) -> Result<Option<Application>, DomainError> {
        let row: Option<ApplicationRow> = sqlx::query_as(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications a \
             WHERE a.job_id = $1 AND a.candidate_id = $2"
        ))
        .bind(job_id)
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding application by job and candidate"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_by_candidate(
        &self,
        candidate_id: EntityId,
    ) -> Result<Vec<ApplicationWithJob>, DomainError> {
        let rows: Vec<ApplicationRow> = sqlx::query_as(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS} FROM applications a
            WHERE a.candidate_id = $1
            ORDER BY a.created_at DESC, a.id DESC
            "#
        ))
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing candidate applications"))?;

        let job_ids: Vec<i32> = rows.iter().map(|r| r.job_id).collect();
        let mut jobs: HashMap<i32, JobWithRelations> = HashMap::new();
        if !job_ids.is_empty() {
            let sql = format!("{} WHERE j.id = ANY($1)", job_listing_select());
            let listings: Vec<JobListingRow> = sqlx::query_as(&sql)
                .bind(job_ids)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("loading applied jobs"))?;
            jobs = listings
                .into_iter()
                .map(|l| (l.job.id, JobWithRelations::from(l)))
                .collect();
        }

        Ok(rows
            .into_iter()
            .map(|r| {
                let job = jobs.get(&r.job_id).cloned();
                ApplicationWithJob {
                    application: r.into(),
                    job,
                }
            })
            .collect())
    }

    async fn list_by_employer(
        &self,
        employer_id: EntityId,
    ) -> Result<Vec<ApplicationWithCandidate>, DomainError> {
        let sql = format!(
            "{} WHERE j.employer_id = $1 ORDER BY a.created_at DESC, a.id DESC",
            candidate_application_select()
        );
        let rows: Vec<CandidateApplicationRow> = sqlx::query_as(&sql)
            .bind(employer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing employer applications"))?;

        self.with_candidates(rows, true).await
    }

    async fn list_by_job(
        &self,
        job_id: EntityId,
    ) -> Result<Vec<ApplicationWithCandidate>, DomainError> {
        let sql = format!(
            "{} WHERE a.job_id = $1 ORDER BY a.created_at DESC, a.id DESC",
            candidate_application_select()
        );
        let rows: Vec<CandidateApplicationRow> = sqlx::query_as(&sql)
            .bind(job_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing job applications"))?;

        self.with_candidates(rows, false).await
    }

    async fn update_status(
        &self,
        id: EntityId,
        status: ApplicationStatus,
    ) -> Result<Application, DomainError> {
        let row: Option<ApplicationRow> = sqlx::query_as(&format!(
            r#"
            UPDATE applications AS a
            SET status = $2, updated_at = NOW()
            WHERE a.id = $1
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating application status"))?;

        row.map(|r| r.into()).ok_or(DomainError::ApplicationNotFound)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting applications"))
    }
}
