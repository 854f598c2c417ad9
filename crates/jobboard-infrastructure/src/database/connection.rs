//! Database connection pool and schema migrations

use std::str::FromStr;
use std::time::Duration;

use jobboard_shared::config::DatabaseSettings;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tracing::info;

use crate::error::InfraError;

/// Migrations embedded at compile time from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, InfraError> {
    let mut options = PgConnectOptions::from_str(&settings.url)?;
    if settings.ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_seconds))
        .connect_with(options)
        .await?;

    info!(
        max_connections = settings.max_connections,
        ssl = settings.ssl,
        "Database pool ready"
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), InfraError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
