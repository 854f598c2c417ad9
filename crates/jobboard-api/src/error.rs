//! API error type and its HTTP mapping

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobboard_core::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Too many requests")]
    TooManyRequests,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

/// JSON error body: `{ "error": "...", "message": "..." }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "Unauthorized", msg)
            }
            ApiError::Forbidden(msg) => {
                tracing::warn!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, "Forbidden", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::TooManyRequests => {
                tracing::warn!("Rate limit exceeded");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "TooManyRequests",
                    "Too many requests, please try again later".to_string(),
                )
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DatabaseError",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound
            | DomainError::JobNotFound
            | DomainError::CompanyNotFound
            | DomainError::ApplicationNotFound => ApiError::NotFound(err.to_string()),
            DomainError::InvalidCredentials
            | DomainError::EmailAlreadyExists(_)
            | DomainError::UsernameAlreadyExists(_)
            | DomainError::AlreadyApplied
            | DomainError::ValidationError(_) => ApiError::BadRequest(err.to_string()),
            DomainError::Forbidden(msg) => ApiError::Forbidden(msg),
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::InternalError(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::JobNotFound, StatusCode::NOT_FOUND),
            (DomainError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (DomainError::AlreadyApplied, StatusCode::BAD_REQUEST),
            (DomainError::forbidden("nope"), StatusCode::FORBIDDEN),
            (
                DomainError::DatabaseError("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn test_internal_details_are_not_leaked() {
        let response =
            ApiError::from(DomainError::DatabaseError("relation users missing".into()))
                .into_response();
        let body = body_of(response).await;
        assert_eq!(body.message, "Internal server error");
        assert_eq!(body.error, "DatabaseError");
    }

    #[tokio::test]
    async fn test_messages_pass_through() {
        let response = ApiError::from(DomainError::InvalidCredentials).into_response();
        let body = body_of(response).await;
        assert_eq!(body.message, "Invalid credentials");
    }
}
