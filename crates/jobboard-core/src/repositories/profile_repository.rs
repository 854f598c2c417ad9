//! Profile repository trait (port)

use async_trait::async_trait;
use jobboard_shared::EntityId;

use crate::domain::{NewProfile, Profile};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: EntityId) -> Result<Option<Profile>, DomainError>;
    async fn create(&self, profile: &NewProfile) -> Result<Profile, DomainError>;
    async fn update(&self, profile: &Profile) -> Result<Profile, DomainError>;
}
