//! Company handlers - /api/companies

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use jobboard_core::domain::{Company, CompanyWithEmployer};
use jobboard_core::dto::{CreateCompanyRequest, UpdateCompanyRequest};
use jobboard_shared::EntityId;

use crate::error::ApiError;
use crate::extract::{EmployerUser, Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
    ValidatedJson(payload): ValidatedJson<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    let company = state.services.companies.create(&user.actor(), payload).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/companies/my-companies
pub async fn my_companies(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
) -> Result<Json<Vec<Company>>, ApiError> {
    Ok(Json(state.services.companies.list_mine(&user.actor()).await?))
}

/// GET /api/companies
pub async fn recent_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, ApiError> {
    Ok(Json(state.services.companies.list_recent().await?))
}

/// GET /api/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<CompanyWithEmployer>, ApiError> {
    Ok(Json(state.services.companies.get(id).await?))
}

/// PUT /api/companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    EmployerUser(user): EmployerUser,
    Path(id): Path<EntityId>,
    ValidatedJson(payload): ValidatedJson<UpdateCompanyRequest>,
) -> Result<Json<Company>, ApiError> {
    Ok(Json(
        state.services.companies.update(&user.actor(), id, payload).await?,
    ))
}
