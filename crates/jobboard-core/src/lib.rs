//! # Job Board Core
//! 
//! Domain entities, request/response contracts, repository traits and services.

pub mod domain;
pub mod dto;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use repositories::Repositories;
