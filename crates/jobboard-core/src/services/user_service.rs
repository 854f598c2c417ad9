//! The caller's own profile

use std::sync::Arc;

use chrono::Utc;
use jobboard_shared::EntityId;
use tracing::info;

use crate::domain::{Actor, NewProfile, Profile, UserChanges, UserWithProfile};
use crate::dto::UpdateProfileRequest;
use crate::error::DomainError;
use crate::repositories::{ProfileRepository, UserRepository};

use super::auth_service::parse_gender;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { users, profiles }
    }

    /// User record with its profile, creating an empty profile when missing
    pub async fn get_profile(&self, actor: &Actor) -> Result<UserWithProfile, DomainError> {
        load_with_profile(self.users.as_ref(), self.profiles.as_ref(), actor.user_id).await
    }

    pub async fn update_profile(
        &self,
        actor: &Actor,
        request: UpdateProfileRequest,
    ) -> Result<UserWithProfile, DomainError> {
        let mut user = self
            .users
            .find_by_id(actor.user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let gender = parse_gender(request.gender)?;
        user.apply_changes(UserChanges {
            headline: request.headline,
            location: request.location,
            phone_number: request.phone_number,
            profile_picture: request.profile_picture,
            github_url: request.github_url,
            linkedin_url: request.linkedin_url,
            gender,
        });
        let user = self.users.update(&user).await?;

        let mut profile = profile_or_create(self.profiles.as_ref(), user.id).await?;
        if let Some(bio) = request.bio {
            profile.bio = Some(bio);
        }
        if let Some(skills) = request.skills {
            profile.skills = skills.into_vec();
        }
        if let Some(work_experience) = request.work_experience {
            profile.work_experience = work_experience;
        }
        if let Some(job_preferences) = request.job_preferences {
            profile.job_preferences = job_preferences;
        }
        profile.updated_at = Utc::now();
        let profile = self.profiles.update(&profile).await?;

        info!(user_id = user.id, "Profile updated");
        Ok(UserWithProfile {
            user,
            profile: Some(profile),
        })
    }
}

pub(crate) async fn load_with_profile(
    users: &dyn UserRepository,
    profiles: &dyn ProfileRepository,
    user_id: EntityId,
) -> Result<UserWithProfile, DomainError> {
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or(DomainError::UserNotFound)?;
    let profile = profile_or_create(profiles, user_id).await?;

    Ok(UserWithProfile {
        user,
        profile: Some(profile),
    })
}

async fn profile_or_create(
    profiles: &dyn ProfileRepository,
    user_id: EntityId,
) -> Result<Profile, DomainError> {
    match profiles.find_by_user(user_id).await? {
        Some(profile) => Ok(profile),
        None => {
            info!(user_id, "Creating missing profile");
            profiles.create(&NewProfile::empty(user_id)).await
        }
    }
}
