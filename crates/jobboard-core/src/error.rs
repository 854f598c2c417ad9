//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found")]
    UserNotFound,

    #[error("Job not found")]
    JobNotFound,

    #[error("Company not found")]
    CompanyNotFound,

    #[error("Application not found")]
    ApplicationNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    EmailAlreadyExists(String),

    #[error("Username already taken")]
    UsernameAlreadyExists(String),

    #[error("Already applied to this job")]
    AlreadyApplied,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::ValidationError(message.into())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(crate::dto::describe_validation_errors(&errors))
    }
}
