//! Employer-owned companies

use std::sync::Arc;

use chrono::Utc;
use jobboard_shared::constants::RECENT_COMPANIES_LIMIT;
use jobboard_shared::utils::non_blank;
use jobboard_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{Actor, Company, CompanyWithEmployer, NewCompany};
use crate::dto::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::error::DomainError;
use crate::repositories::CompanyRepository;

#[derive(Clone)]
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateCompanyRequest,
    ) -> Result<Company, DomainError> {
        let name = non_blank(request.name)
            .ok_or_else(|| DomainError::validation("Company name is required"))?;

        let company = self
            .companies
            .create(&NewCompany {
                name,
                description: non_blank(request.description),
                website: non_blank(request.website),
                location: non_blank(request.location),
                logo: non_blank(request.logo),
                employer_id: actor.user_id,
            })
            .await?;

        info!(company_id = company.id, employer_id = actor.user_id, "Company created");
        Ok(company)
    }

    pub async fn list_mine(&self, actor: &Actor) -> Result<Vec<Company>, DomainError> {
        self.companies.list_by_employer(actor.user_id).await
    }

    pub async fn list_recent(&self) -> Result<Vec<Company>, DomainError> {
        self.companies.list_recent(RECENT_COMPANIES_LIMIT).await
    }

    pub async fn get(&self, id: EntityId) -> Result<CompanyWithEmployer, DomainError> {
        self.companies
            .find_with_employer(id)
            .await?
            .ok_or(DomainError::CompanyNotFound)
    }

    /// Owner-only partial update
    pub async fn update(
        &self,
        actor: &Actor,
        id: EntityId,
        request: UpdateCompanyRequest,
    ) -> Result<Company, DomainError> {
        let mut company = self
            .companies
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CompanyNotFound)?;

        if !company.is_owned_by(actor.user_id) {
            warn!(
                company_id = id,
                user_id = actor.user_id,
                "Company update refused: not the owner"
            );
            return Err(DomainError::forbidden("Not authorized to update this company"));
        }

        if let Some(name) = request.name {
            company.name = non_blank(Some(name))
                .ok_or_else(|| DomainError::validation("Company name cannot be empty"))?;
        }
        if let Some(v) = request.description {
            company.description = non_blank(Some(v));
        }
        if let Some(v) = request.website {
            company.website = non_blank(Some(v));
        }
        if let Some(v) = request.location {
            company.location = non_blank(Some(v));
        }
        if let Some(v) = request.logo {
            company.logo = non_blank(Some(v));
        }
        company.updated_at = Utc::now();

        self.companies.update(&company).await
    }
}
