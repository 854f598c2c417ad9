//! Job handlers - /api/jobs

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use jobboard_core::domain::{EmployerJob, Job, JobFilter, JobWithRelations};
use jobboard_core::dto::{CreateJobRequest, MessageResponse, UpdateJobRequest};
use jobboard_shared::EntityId;

use crate::error::ApiError;
use crate::extract::{EmployerOrAdmin, EmployerUser, Path, Query, ValidatedJson};
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<JobWithRelations>>, ApiError> {
    Ok(Json(state.services.jobs.list(&filter).await?))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<JobWithRelations>, ApiError> {
    Ok(Json(state.services.jobs.get(id).await?))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
    ValidatedJson(payload): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = state.services.jobs.create(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs/employer
pub async fn employer_jobs(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
) -> Result<Json<Vec<EmployerJob>>, ApiError> {
    Ok(Json(state.services.jobs.list_for_employer(&user.actor()).await?))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
    Path(id): Path<EntityId>,
    ValidatedJson(payload): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(state.services.jobs.update(&user.actor(), id, payload).await?))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    EmployerOrAdmin(user): EmployerOrAdmin,
    Path(id): Path<EntityId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.services.jobs.delete(&user.actor(), id).await?;
    Ok(Json(MessageResponse::new("Job deleted successfully")))
}
