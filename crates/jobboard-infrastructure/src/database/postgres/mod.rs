//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod profile_repo_impl;
pub mod company_repo_impl;
pub mod job_repo_impl;
pub mod application_repo_impl;
mod rows;

use std::sync::Arc;

use jobboard_core::error::DomainError;
use jobboard_core::Repositories;
use sqlx::PgPool;
use tracing::error;

pub use user_repo_impl::PgUserRepository;
pub use profile_repo_impl::PgProfileRepository;
pub use company_repo_impl::PgCompanyRepository;
pub use job_repo_impl::PgJobRepository;
pub use application_repo_impl::PgApplicationRepository;

pub fn postgres_repositories(pool: PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        profiles: Arc::new(PgProfileRepository::new(pool.clone())),
        companies: Arc::new(PgCompanyRepository::new(pool.clone())),
        jobs: Arc::new(PgJobRepository::new(pool.clone())),
        applications: Arc::new(PgApplicationRepository::new(pool)),
    }
}

/// Logs the failure and hides driver details behind `DatabaseError`.
pub(crate) fn db_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", operation, e);
        DomainError::DatabaseError(e.to_string())
    }
}

/// Name of the unique constraint a write tripped over, if any.
pub(crate) fn unique_violation(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            Some(db.constraint().unwrap_or_default().to_string())
        }
        _ => None,
    }
}

/// `%term%` for ILIKE with wildcard characters in the term escaped.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
