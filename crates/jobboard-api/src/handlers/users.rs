//! Profile handlers - /api/users

use axum::{extract::State, Json};
use jobboard_core::domain::UserWithProfile;
use jobboard_core::dto::UpdateProfileRequest;

use crate::error::ApiError;
use crate::extract::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserWithProfile>, ApiError> {
    Ok(Json(state.services.users.get_profile(&user.actor()).await?))
}

/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UserWithProfile>, ApiError> {
    Ok(Json(
        state
            .services
            .users
            .update_profile(&user.actor(), payload)
            .await?,
    ))
}
