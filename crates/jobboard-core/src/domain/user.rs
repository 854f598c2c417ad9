// ============================================================================
// Job Board Core - User Entity
// File: crates/jobboard-core/src/domain/user.rs
// Description: Account record, roles and the public projections of a user
// ============================================================================

use chrono::{DateTime, Utc};
use jobboard_shared::EntityId;
use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Candidate,
    Employer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "CANDIDATE",
            Role::Employer => "EMPLOYER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "CANDIDATE" => Some(Role::Candidate),
            "EMPLOYER" => Some(Role::Employer),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Roles a visitor may pick for themselves at registration.
    pub fn is_self_assignable(&self) -> bool {
        matches!(self, Role::Candidate | Role::Employer)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Candidate
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// User entity
///
/// The password hash never leaves the process: it is skipped by serde in both
/// directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub name: String,
    pub username: Option<String>,
    pub gender: Option<Gender>,
    pub role: Role,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub skills: Option<String>,
    pub profile_picture: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Apply a partial update; absent fields keep their value.
    pub fn apply_changes(&mut self, changes: UserChanges) {
        let UserChanges {
            headline,
            location,
            phone_number,
            profile_picture,
            github_url,
            linkedin_url,
            gender,
        } = changes;

        if let Some(v) = headline {
            self.headline = Some(v);
        }
        if let Some(v) = location {
            self.location = Some(v);
        }
        if let Some(v) = phone_number {
            self.phone_number = Some(v);
        }
        if let Some(v) = profile_picture {
            self.profile_picture = Some(v);
        }
        if let Some(v) = github_url {
            self.github_url = Some(v);
        }
        if let Some(v) = linkedin_url {
            self.linkedin_url = Some(v);
        }
        if let Some(v) = gender {
            self.gender = Some(v);
        }
        self.updated_at = Utc::now();
    }
}

/// Insert payload for a user row
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub username: Option<String>,
    pub gender: Option<Gender>,
    pub role: Role,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub skills: Option<String>,
}

impl NewUser {
    pub fn new(email: String, password_hash: String, name: String, role: Role) -> Self {
        Self {
            email,
            password_hash,
            name,
            role,
            ..Default::default()
        }
    }
}

/// User-level fields editable from the profile page
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub headline: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub profile_picture: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub gender: Option<Gender>,
}

/// User shape returned by login/register and kept in client sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Row of the admin user listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// User record with its profile attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithProfile {
    #[serde(flatten)]
    pub user: User,
    pub profile: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: 7,
            email: "jane@example.com".into(),
            password_hash: "$2b$10$secret".into(),
            name: "Jane".into(),
            username: Some("jane".into()),
            gender: Some(Gender::Female),
            role: Role::Candidate,
            headline: None,
            bio: None,
            location: None,
            phone_number: None,
            skills: None,
            profile_picture: None,
            github_url: None,
            linkedin_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::from_str("employer"), Some(Role::Employer));
        assert_eq!(Role::from_str("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::from_str("recruiter"), None);
        assert!(!Role::Admin.is_self_assignable());
        assert!(Role::Candidate.is_self_assignable());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "CANDIDATE");
        assert_eq!(json["gender"], "FEMALE");
        assert!(json.get("phoneNumber").is_some());
    }

    #[test]
    fn test_apply_changes_keeps_absent_fields() {
        let mut user = sample_user();
        user.location = Some("Austin, TX".into());
        user.apply_changes(UserChanges {
            headline: Some("Full Stack Developer".into()),
            ..Default::default()
        });

        assert_eq!(user.headline.as_deref(), Some("Full Stack Developer"));
        assert_eq!(user.location.as_deref(), Some("Austin, TX"));
    }
}
