//! Backing store selection from configuration

use jobboard_core::Repositories;
use jobboard_shared::config::DatabaseSettings;
use jobboard_shared::constants::MEMORY_DATABASE_URL;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::database::{create_pool, postgres_repositories, run_migrations};
use crate::error::InfraError;
use crate::memory::MemoryStore;

#[derive(Clone)]
pub enum Store {
    Postgres(PgPool),
    Memory(MemoryStore),
}

impl Store {
    /// Connects to PostgreSQL, or opens an empty in-memory store for `memory://`.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, InfraError> {
        if settings.url.starts_with(MEMORY_DATABASE_URL) {
            warn!("Using the in-memory store; data is lost on restart");
            return Ok(Store::Memory(MemoryStore::new()));
        }
        Ok(Store::Postgres(create_pool(settings).await?))
    }

    pub async fn migrate(&self) -> Result<(), InfraError> {
        match self {
            Store::Postgres(pool) => run_migrations(pool).await,
            Store::Memory(_) => {
                info!("In-memory store needs no migrations");
                Ok(())
            }
        }
    }

    pub fn repositories(&self) -> Repositories {
        match self {
            Store::Postgres(pool) => postgres_repositories(pool.clone()),
            Store::Memory(store) => store.repositories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_url_selects_memory_store() {
        let mut settings = jobboard_shared::config::AppConfig::default().database;
        settings.url = MEMORY_DATABASE_URL.to_string();
        let store = Store::connect(&settings).await.unwrap();
        assert!(matches!(store, Store::Memory(_)));
        store.migrate().await.unwrap();
        assert_eq!(store.repositories().users.count().await.unwrap(), 0);
    }
}
