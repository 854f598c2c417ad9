// ============================================================================
// Job Board Core - Job Entity
// File: crates/jobboard-core/src/domain/job.rs
// Description: Job listing and its read-side projections
// ============================================================================

use chrono::{DateTime, Utc};
use jobboard_shared::EntityId;
use serde::{Deserialize, Serialize};

use super::company::EmployerContact;

/// Employment type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Internship => "INTERNSHIP",
            JobType::Remote => "REMOTE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "FULL_TIME" => Some(JobType::FullTime),
            "PART_TIME" => Some(JobType::PartTime),
            "CONTRACT" => Some(JobType::Contract),
            "INTERNSHIP" => Some(JobType::Internship),
            "REMOTE" => Some(JobType::Remote),
            _ => None,
        }
    }
}

impl Default for JobType {
    fn default() -> Self {
        JobType::FullTime
    }
}

/// Job entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub employer_id: EntityId,
    /// Unset only on legacy rows posted before companies existed.
    pub company_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn is_owned_by(&self, user_id: EntityId) -> bool {
        self.employer_id == user_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub location: String,
    pub job_type: JobType,
    pub employer_id: EntityId,
    pub company_id: Option<EntityId>,
}

/// Company fields embedded in job listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: EntityId,
    pub name: String,
    pub logo: Option<String>,
    pub location: Option<String>,
}

/// Public job listing: the job with its employer contact and company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobWithRelations {
    #[serde(flatten)]
    pub job: Job,
    pub employer: Option<EmployerContact>,
    pub company: Option<CompanySummary>,
}

impl JobWithRelations {
    /// Case-insensitive match on title, location, employer name or company name.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.job.title.to_lowercase().contains(&term)
            || self.job.location.to_lowercase().contains(&term)
            || self
                .employer
                .as_ref()
                .is_some_and(|e| e.name.to_lowercase().contains(&term))
            || self
                .company
                .as_ref()
                .is_some_and(|c| c.name.to_lowercase().contains(&term))
    }
}

/// Employer dashboard row: the job plus how many applications it has
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerJob {
    #[serde(flatten)]
    pub job: Job,
    pub application_count: i64,
}

/// Optional filters for the public job listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub search: Option<String>,
    pub company_id: Option<EntityId>,
}

impl JobFilter {
    /// The search term, ignoring blank input.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
