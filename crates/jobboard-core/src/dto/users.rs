//! Profile update payload

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::profile::split_skills;
use crate::domain::{JobPreferences, WorkExperience};

/// Skills arrive either as a list or as a comma-separated string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

impl SkillsInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillsInput::List(items) => items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            SkillsInput::Text(raw) => split_skills(&raw),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    // user fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50, message = "Phone number must be at most 50 characters"))]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    // profile fields
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000, message = "Bio must be at most 5000 characters"))]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_preferences: Option<JobPreferences>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_accepts_list_or_string() {
        let from_text: UpdateProfileRequest =
            serde_json::from_str(r#"{"skills": "Rust, SQL ,"}"#).unwrap();
        let from_list: UpdateProfileRequest =
            serde_json::from_str(r#"{"skills": [" Rust", "SQL", ""]}"#).unwrap();

        assert_eq!(from_text.skills.unwrap().into_vec(), vec!["Rust", "SQL"]);
        assert_eq!(from_list.skills.unwrap().into_vec(), vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let req: UpdateProfileRequest = serde_json::from_str(r#"{"headline": "Dev"}"#).unwrap();
        assert_eq!(req.headline.as_deref(), Some("Dev"));
        assert!(req.bio.is_none());
        assert!(req.skills.is_none());
        assert!(req.job_preferences.is_none());
    }

    #[test]
    fn test_phone_number_fits_its_column() {
        let fits = UpdateProfileRequest {
            phone_number: Some("1".repeat(50)),
            ..Default::default()
        };
        let too_long = UpdateProfileRequest {
            phone_number: Some("1".repeat(51)),
            ..Default::default()
        };

        assert!(fits.validate().is_ok());
        assert!(too_long.validate().is_err());
    }
}
