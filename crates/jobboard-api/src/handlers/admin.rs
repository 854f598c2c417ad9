//! Admin handlers - /api/admin

use axum::{extract::State, Json};
use jobboard_core::domain::{UserSummary, UserWithProfile};
use jobboard_core::dto::{MessageResponse, PlatformStats};
use jobboard_shared::EntityId;

use crate::error::ApiError;
use crate::extract::{AdminUser, Path};
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<PlatformStats>, ApiError> {
    Ok(Json(state.services.admin.stats().await?))
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    Ok(Json(state.services.admin.list_users().await?))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<EntityId>,
) -> Result<Json<UserWithProfile>, ApiError> {
    Ok(Json(state.services.admin.get_user(id).await?))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<EntityId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.services.admin.delete_user(&admin.actor(), id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
