use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::domain::{NewProfile, Profile};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::ProfileRepository;
use jobboard_shared::EntityId;

use super::{next_id, MemoryStore};

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_user(&self, user_id: EntityId) -> Result<Option<Profile>, DomainError> {
        Ok(self.tables.read().profile_of(user_id).cloned())
    }

    async fn create(&self, profile: &NewProfile) -> Result<Profile, DomainError> {
        let mut tables = self.tables.write();
        if let Some(existing) = tables.profile_of(profile.user_id) {
            return Ok(existing.clone());
        }
        if !tables.users.contains_key(&profile.user_id) {
            return Err(DomainError::UserNotFound);
        }

        let now = Utc::now();
        let created = Profile {
            id: next_id(&mut tables.seq.profiles),
            user_id: profile.user_id,
            bio: profile.bio.clone(),
            resume_url: None,
            skills: profile.skills.clone(),
            company_name: profile.company_name.clone(),
            company_url: profile.company_url.clone(),
            work_experience: Vec::new(),
            job_preferences: Default::default(),
            profile_stats: Default::default(),
            created_at: now,
            updated_at: now,
        };
        tables.profiles.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, DomainError> {
        let mut tables = self.tables.write();
        let stored = tables
            .profiles
            .get_mut(&profile.id)
            .ok_or(DomainError::UserNotFound)?;
        *stored = Profile {
            user_id: stored.user_id,
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..profile.clone()
        };
        Ok(stored.clone())
    }
}
