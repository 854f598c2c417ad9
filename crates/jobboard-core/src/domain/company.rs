// ============================================================================
// Job Board Core - Company Entity
// File: crates/jobboard-core/src/domain/company.rs
// ============================================================================

use chrono::{DateTime, Utc};
use jobboard_shared::EntityId;
use serde::{Deserialize, Serialize};

/// Company owned by an employer account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub employer_id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub fn is_owned_by(&self, user_id: EntityId) -> bool {
        self.employer_id == user_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub employer_id: EntityId,
}

/// Public contact of the employer behind a company or job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerContact {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyWithEmployer {
    #[serde(flatten)]
    pub company: Company,
    pub employer: Option<EmployerContact>,
}
