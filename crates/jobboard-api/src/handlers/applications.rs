//! Application handlers - /api/applications

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use jobboard_core::domain::{Application, ApplicationWithCandidate, ApplicationWithJob};
use jobboard_core::dto::{ApplyRequest, UpdateStatusRequest};
use jobboard_shared::EntityId;

use crate::error::ApiError;
use crate::extract::{CandidateUser, EmployerUser, Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/applications
pub async fn apply(
    State(state): State<AppState>,
    CandidateUser(user): CandidateUser,
    ValidatedJson(payload): ValidatedJson<ApplyRequest>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let application = state.services.applications.apply(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/my
pub async fn my_applications(
    State(state): State<AppState>,
    CandidateUser(user): CandidateUser,
) -> Result<Json<Vec<ApplicationWithJob>>, ApiError> {
    Ok(Json(state.services.applications.list_mine(&user.actor()).await?))
}

/// GET /api/applications/employer
pub async fn employer_applications(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
) -> Result<Json<Vec<ApplicationWithCandidate>>, ApiError> {
    Ok(Json(
        state
            .services
            .applications
            .list_for_employer(&user.actor())
            .await?,
    ))
}

/// GET /api/applications/job/{job_id}
pub async fn job_applications(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
    Path(job_id): Path<EntityId>,
) -> Result<Json<Vec<ApplicationWithCandidate>>, ApiError> {
    Ok(Json(
        state
            .services
            .applications
            .list_for_job(&user.actor(), job_id)
            .await?,
    ))
}

/// PUT /api/applications/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
    Path(id): Path<EntityId>,
    ValidatedJson(payload): ValidatedJson<UpdateStatusRequest>,
) -> Result<Json<Application>, ApiError> {
    Ok(Json(
        state
            .services
            .applications
            .update_status(&user.actor(), id, payload)
            .await?,
    ))
}
