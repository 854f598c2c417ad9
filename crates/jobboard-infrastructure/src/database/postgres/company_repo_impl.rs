// ============================================================================
// Job Board Infrastructure - PostgreSQL Company Repository
// File: crates/jobboard-infrastructure/src/database/postgres/company_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use jobboard_core::domain::{Company, CompanyWithEmployer, EmployerContact, NewCompany};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::CompanyRepository;
use jobboard_shared::EntityId;

use super::db_error;

const COMPANY_COLUMNS: &str = "c.id, c.name, c.description, c.website, c.location, c.logo, \
     c.employer_id, c.created_at, c.updated_at";

pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub employer_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            description: row.description,
            website: row.website,
            location: row.location,
            logo: row.logo,
            employer_id: row.employer_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct CompanyEmployerRow {
    #[sqlx(flatten)]
    pub company: CompanyRow,
    pub employer_name: Option<String>,
    pub employer_email: Option<String>,
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError> {
        let row: CompanyRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO companies AS c (name, description, website, location, logo, employer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.website)
        .bind(&company.location)
        .bind(&company.logo)
        .bind(company.employer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating company"))?;

        info!("Company created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> =
            sqlx::query_as(&format!("SELECT {COMPANY_COLUMNS} FROM companies c WHERE c.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("finding company"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_with_employer(
        &self,
        id: EntityId,
    ) -> Result<Option<CompanyWithEmployer>, DomainError> {
        let row: Option<CompanyEmployerRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COMPANY_COLUMNS}, u.name AS employer_name, u.email AS employer_email
            FROM companies c
            LEFT JOIN users u ON u.id = c.employer_id
            WHERE c.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding company with employer"))?;

        Ok(row.map(|r| {
            let employer = match (r.employer_name, r.employer_email) {
                (Some(name), Some(email)) => Some(EmployerContact { name, email }),
                _ => None,
            };
            CompanyWithEmployer {
                company: r.company.into(),
                employer,
            }
        }))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Company>, DomainError> {
        let rows: Vec<CompanyRow> = sqlx::query_as(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies c \
             ORDER BY c.created_at DESC, c.id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing recent companies"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_employer(&self, employer_id: EntityId) -> Result<Vec<Company>, DomainError> {
        let rows: Vec<CompanyRow> = sqlx::query_as(&format!(
            r#"
            SELECT {COMPANY_COLUMNS} FROM companies c
            WHERE c.employer_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            "#
        ))
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing employer companies"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, company: &Company) -> Result<Company, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(&format!(
            r#"
            UPDATE companies AS c
            SET name = $2, description = $3, website = $4, location = $5, logo = $6,
                updated_at = NOW()
            WHERE c.id = $1
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.website)
        .bind(&company.location)
        .bind(&company.logo)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating company"))?;

        row.map(|r| r.into()).ok_or(DomainError::CompanyNotFound)
    }
}
