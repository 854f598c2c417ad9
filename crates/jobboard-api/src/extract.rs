//! Request extractors: validated JSON bodies, path and query parameters,
//! the bearer-token identity and role guards.

use axum::extract::rejection::JsonRejection;
use axum::extract::{self, FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use jobboard_core::domain::{Actor, Role};
use jobboard_core::dto::describe_validation_errors;
use jobboard_security::JwtError;
use jobboard_shared::EntityId;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// JSON body that is deserialized and validated, rejecting with 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::bad_request(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::bad_request(describe_validation_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters whose parse failures render as a JSON 400.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extract::Path(value) = extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Path(value))
    }
}

/// Query string parameters whose parse failures render as a JSON 400.
#[derive(Debug, Clone, Default)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extract::Query(value) = extract::Query::<T>::from_request_parts(parts, state).await?;
        Ok(Query(value))
    }
}

/// Authenticated caller, taken from `Authorization: Bearer <token>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: EntityId,
    pub role: Role,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }

    fn require(self, allowed: &[Role]) -> Result<Self, ApiError> {
        if allowed.contains(&self.role) {
            Ok(self)
        } else {
            Err(ApiError::forbidden("Insufficient permissions"))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Access token required"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Access token required"))?;

        let claims = state.jwt.validate_token(token).map_err(|e| {
            debug!("Token rejected: {}", e);
            match e {
                JwtError::TokenExpired => ApiError::unauthorized("Token expired"),
                _ => ApiError::unauthorized("Invalid token"),
            }
        })?;

        let role = Role::from_str(&claims.role)
            .ok_or_else(|| ApiError::unauthorized("Invalid token"))?;

        Ok(AuthUser {
            user_id: claims.user_id,
            role,
        })
    }
}

async fn guard(
    parts: &mut Parts,
    state: &AppState,
    allowed: &[Role],
) -> Result<AuthUser, ApiError> {
    AuthUser::from_request_parts(parts, state)
        .await?
        .require(allowed)
}

/// Caller holding the EMPLOYER role
#[derive(Debug, Clone, Copy)]
pub struct EmployerUser(pub AuthUser);

impl FromRequestParts<AppState> for EmployerUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guard(parts, state, &[Role::Employer]).await.map(Self)
    }
}

/// Caller holding the CANDIDATE role
#[derive(Debug, Clone, Copy)]
pub struct CandidateUser(pub AuthUser);

impl FromRequestParts<AppState> for CandidateUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guard(parts, state, &[Role::Candidate]).await.map(Self)
    }
}

/// Caller holding the ADMIN role
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub AuthUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guard(parts, state, &[Role::Admin]).await.map(Self)
    }
}

/// EMPLOYER or ADMIN; used where admins moderate employer content
#[derive(Debug, Clone, Copy)]
pub struct EmployerOrAdmin(pub AuthUser);

impl FromRequestParts<AppState> for EmployerOrAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guard(parts, state, &[Role::Employer, Role::Admin]).await.map(Self)
    }
}
