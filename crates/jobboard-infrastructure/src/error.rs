//! Infrastructure errors (bootstrap only; repositories speak `DomainError`)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection failed: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
