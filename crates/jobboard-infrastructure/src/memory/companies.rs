use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::domain::{Company, CompanyWithEmployer, NewCompany};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::CompanyRepository;
use jobboard_shared::EntityId;

use super::{newest_first, next_id, MemoryStore};

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&company.employer_id) {
            return Err(DomainError::UserNotFound);
        }

        let now = Utc::now();
        let created = Company {
            id: next_id(&mut tables.seq.companies),
            name: company.name.clone(),
            description: company.description.clone(),
            website: company.website.clone(),
            location: company.location.clone(),
            logo: company.logo.clone(),
            employer_id: company.employer_id,
            created_at: now,
            updated_at: now,
        };
        tables.companies.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Company>, DomainError> {
        Ok(self.tables.read().companies.get(&id).cloned())
    }

    async fn find_with_employer(
        &self,
        id: EntityId,
    ) -> Result<Option<CompanyWithEmployer>, DomainError> {
        let tables = self.tables.read();
        Ok(tables.companies.get(&id).map(|c| CompanyWithEmployer {
            company: c.clone(),
            employer: tables.employer_contact(c.employer_id),
        }))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Company>, DomainError> {
        let mut companies: Vec<Company> = self.tables.read().companies.values().cloned().collect();
        newest_first(&mut companies, |c| (c.created_at, c.id));
        companies.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(companies)
    }

    async fn list_by_employer(&self, employer_id: EntityId) -> Result<Vec<Company>, DomainError> {
        let mut companies: Vec<Company> = self
            .tables
            .read()
            .companies
            .values()
            .filter(|c| c.employer_id == employer_id)
            .cloned()
            .collect();
        newest_first(&mut companies, |c| (c.created_at, c.id));
        Ok(companies)
    }

    async fn update(&self, company: &Company) -> Result<Company, DomainError> {
        let mut tables = self.tables.write();
        let stored = tables
            .companies
            .get_mut(&company.id)
            .ok_or(DomainError::CompanyNotFound)?;
        *stored = Company {
            employer_id: stored.employer_id,
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..company.clone()
        };
        Ok(stored.clone())
    }
}
