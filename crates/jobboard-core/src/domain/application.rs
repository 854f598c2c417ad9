// ============================================================================
// Job Board Core - Application Entity
// File: crates/jobboard-core/src/domain/application.rs
// Description: A candidate's submission against a job and its workflow status
// ============================================================================

use chrono::{DateTime, Utc};
use jobboard_shared::EntityId;
use serde::{Deserialize, Serialize};

use super::job::{JobType, JobWithRelations};
use super::profile::Profile;

/// Workflow status, changed only by the employer owning the job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Reviewing,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::Reviewing => "REVIEWING",
            ApplicationStatus::Interview => "INTERVIEW",
            ApplicationStatus::Offer => "OFFER",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "APPLIED" => Some(ApplicationStatus::Applied),
            "REVIEWING" => Some(ApplicationStatus::Reviewing),
            "INTERVIEW" => Some(ApplicationStatus::Interview),
            "OFFER" => Some(ApplicationStatus::Offer),
            "REJECTED" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Applied
    }
}

/// Application entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: EntityId,
    pub job_id: EntityId,
    pub candidate_id: EntityId,
    pub status: ApplicationStatus,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewApplication {
    pub job_id: EntityId,
    pub candidate_id: EntityId,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
}

/// Candidate dashboard row: the application and the job it targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: Application,
    pub job: Option<JobWithRelations>,
}

/// Job fields embedded in the employer's application inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: EntityId,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
}

/// Applicant as seen by the employer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub profile: Option<Profile>,
}

/// Employer view of an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithCandidate {
    #[serde(flatten)]
    pub application: Application,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub job: Option<JobSummary>,
    pub candidate: Option<CandidateSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_applied() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            ApplicationStatus::from_str("interview"),
            Some(ApplicationStatus::Interview)
        );
        assert_eq!(ApplicationStatus::from_str("HIRED"), None);
        let parsed: Result<ApplicationStatus, _> = serde_json::from_str("\"HIRED\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_set_status_touches_updated_at() {
        let created = Utc::now() - chrono::Duration::days(1);
        let mut application = Application {
            id: 1,
            job_id: 2,
            candidate_id: 3,
            status: ApplicationStatus::Applied,
            resume_url: None,
            cover_letter: None,
            created_at: created,
            updated_at: created,
        };
        application.set_status(ApplicationStatus::Offer);
        assert_eq!(application.status, ApplicationStatus::Offer);
        assert!(application.updated_at > created);
    }
}
