//! # Job Board Infrastructure
//!
//! Storage adapters: PostgreSQL repositories, embedded migrations and an
//! in-memory store for development and tests.

pub mod database;
pub mod memory;
pub mod error;
pub mod store;

pub use database::{create_pool, postgres_repositories, run_migrations, MIGRATOR};
pub use error::InfraError;
pub use memory::MemoryStore;
pub use store::Store;
