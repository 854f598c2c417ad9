// ============================================================================
// Job Board API - Auth Handlers
// File: crates/jobboard-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login, current user)

use axum::{extract::State, http::StatusCode, Json};
use jobboard_core::domain::UserInfo;
use jobboard_core::dto::{AuthResponse, LoginRequest, RegisterRequest};

use crate::error::ApiError;
use crate::extract::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// Register handler - POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let response = state.services.auth.register(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login handler - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    Ok(Json(state.services.auth.login(payload).await?))
}

/// Current user - GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserInfo>, ApiError> {
    Ok(Json(state.services.auth.current_user(&user.actor()).await?))
}
