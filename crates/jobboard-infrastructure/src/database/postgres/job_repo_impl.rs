// ============================================================================
// Job Board Infrastructure - PostgreSQL Job Repository
// File: crates/jobboard-infrastructure/src/database/postgres/job_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::info;

use jobboard_core::domain::{EmployerJob, Job, JobFilter, JobWithRelations, NewJob};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::JobRepository;
use jobboard_shared::EntityId;

use super::rows::{job_listing_select, JobListingRow, JobRow, JOB_COLUMNS};
use super::{db_error, like_pattern};

pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployerJobRow {
    #[sqlx(flatten)]
    pub job: JobRow,
    pub application_count: i64,
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job, DomainError> {
        let row: JobRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO jobs AS j (
                title, description, requirements, salary, location,
                job_type, employer_id, company_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.salary)
        .bind(&job.location)
        .bind(job.job_type.as_str())
        .bind(job.employer_id)
        .bind(job.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating job"))?;

        info!("Job created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Job>, DomainError> {
        let row: Option<JobRow> =
            sqlx::query_as(&format!("SELECT {JOB_COLUMNS} FROM jobs j WHERE j.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("finding job"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_with_relations(
        &self,
        id: EntityId,
    ) -> Result<Option<JobWithRelations>, DomainError> {
        let sql = format!("{} WHERE j.id = $1", job_listing_select());
        let row: Option<JobListingRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding job listing"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobWithRelations>, DomainError> {
        let sql = format!(
            r#"{}
            WHERE ($1::TEXT IS NULL
                   OR j.title ILIKE $1 OR j.location ILIKE $1
                   OR u.name ILIKE $1 OR c.name ILIKE $1)
              AND ($2::INTEGER IS NULL OR j.company_id = $2)
            ORDER BY j.created_at DESC, j.id DESC
            "#,
            job_listing_select()
        );
        let rows: Vec<JobListingRow> = sqlx::query_as(&sql)
            .bind(filter.search_term().map(like_pattern))
            .bind(filter.company_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing jobs"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_employer(
        &self,
        employer_id: EntityId,
    ) -> Result<Vec<EmployerJob>, DomainError> {
        let rows: Vec<EmployerJobRow> = sqlx::query_as(&format!(
            r#"
            SELECT {JOB_COLUMNS},
                   (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS application_count
            FROM jobs j
            WHERE j.employer_id = $1
            ORDER BY j.created_at DESC, j.id DESC
            "#
        ))
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing employer jobs"))?;

        Ok(rows
            .into_iter()
            .map(|r| EmployerJob {
                job: r.job.into(),
                application_count: r.application_count,
            })
            .collect())
    }

    async fn update(&self, job: &Job) -> Result<Job, DomainError> {
        let row: Option<JobRow> = sqlx::query_as(&format!(
            r#"
            UPDATE jobs AS j
            SET title = $2, description = $3, requirements = $4, salary = $5,
                location = $6, job_type = $7, company_id = $8, updated_at = NOW()
            WHERE j.id = $1
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.salary)
        .bind(&job.location)
        .bind(job.job_type.as_str())
        .bind(job.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating job"))?;

        row.map(|r| r.into()).ok_or(DomainError::JobNotFound)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting job"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting jobs"))
    }
}
