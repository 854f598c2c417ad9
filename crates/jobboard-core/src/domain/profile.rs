//! Profile domain entity
//!
//! Extended, mostly free-form attributes kept apart from the user record.

use chrono::{DateTime, Utc};
use jobboard_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: EntityId,
    pub user_id: EntityId,
    pub bio: Option<String>,
    pub resume_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub job_preferences: JobPreferences,
    #[serde(default)]
    pub profile_stats: ProfileStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    pub availability: Option<String>,
    pub expected_salary: Option<String>,
    pub education: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub area: Option<String>,
    pub country: Option<String>,
    pub state_region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub views: Option<i32>,
    pub applications: Option<i32>,
    pub saved_jobs: Option<i32>,
    pub completeness: Option<i32>,
}

/// Insert payload for a profile row
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub user_id: EntityId,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
}

impl NewProfile {
    pub fn empty(user_id: EntityId) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }
}

/// Splits a comma-separated skills string into trimmed, non-empty entries.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills() {
        assert_eq!(
            split_skills("React, Node.js ,, TypeScript "),
            vec!["React", "Node.js", "TypeScript"]
        );
        assert!(split_skills("").is_empty());
    }

    #[test]
    fn test_job_preferences_field_names() {
        let prefs = JobPreferences {
            address_line1: Some("1 Main St".into()),
            state_region: Some("West".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["addressLine1"], "1 Main St");
        assert_eq!(json["stateRegion"], "West");
    }

    #[test]
    fn test_work_experience_tolerates_missing_fields() {
        let exp: WorkExperience = serde_json::from_str(r#"{"title":"Engineer"}"#).unwrap();
        assert_eq!(exp.title.as_deref(), Some("Engineer"));
        assert!(!exp.current);
        assert!(exp.company.is_none());
    }
}
