//! Platform administration

use std::sync::Arc;

use jobboard_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{Actor, UserSummary, UserWithProfile};
use crate::dto::PlatformStats;
use crate::error::DomainError;
use crate::repositories::{
    ApplicationRepository, JobRepository, ProfileRepository, UserRepository,
};

use super::user_service::load_with_profile;

#[derive(Clone)]
pub struct AdminService {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
    jobs: Arc<dyn JobRepository>,
    applications: Arc<dyn ApplicationRepository>,
}

impl AdminService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        jobs: Arc<dyn JobRepository>,
        applications: Arc<dyn ApplicationRepository>,
    ) -> Self {
        Self {
            users,
            profiles,
            jobs,
            applications,
        }
    }

    pub async fn stats(&self) -> Result<PlatformStats, DomainError> {
        Ok(PlatformStats {
            users: self.users.count().await?,
            jobs: self.jobs.count().await?,
            applications: self.applications.count().await?,
        })
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, DomainError> {
        let users = self.users.list().await?;
        Ok(users.iter().map(UserSummary::from).collect())
    }

    pub async fn get_user(&self, id: EntityId) -> Result<UserWithProfile, DomainError> {
        load_with_profile(self.users.as_ref(), self.profiles.as_ref(), id).await
    }

    /// Removes a non-admin account together with everything it owns
    pub async fn delete_user(&self, actor: &Actor, id: EntityId) -> Result<(), DomainError> {
        let target = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if target.is_admin() {
            warn!(target_id = id, admin_id = actor.user_id, "Refused to delete an admin account");
            return Err(DomainError::forbidden("Admin accounts cannot be deleted"));
        }

        if !self.users.delete(id).await? {
            return Err(DomainError::UserNotFound);
        }
        info!(target_id = id, admin_id = actor.user_id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, User};
    use crate::repositories::{
        MockApplicationRepository, MockJobRepository, MockProfileRepository, MockUserRepository,
    };
    use chrono::{Duration, Utc};

    fn user(id: i32, role: Role) -> User {
        let created = Utc::now() - Duration::days(id as i64);
        User {
            id,
            email: format!("user{id}@example.com"),
            password_hash: "hash".into(),
            name: format!("User {id}"),
            username: None,
            gender: None,
            role,
            headline: None,
            bio: None,
            location: None,
            phone_number: None,
            skills: None,
            profile_picture: None,
            github_url: None,
            linkedin_url: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn service(users: MockUserRepository) -> AdminService {
        AdminService::new(
            Arc::new(users),
            Arc::new(MockProfileRepository::new()),
            Arc::new(MockJobRepository::new()),
            Arc::new(MockApplicationRepository::new()),
        )
    }

    fn admin() -> Actor {
        Actor::new(1, Role::Admin)
    }

    #[tokio::test]
    async fn test_stats_counts_everything() {
        let mut users = MockUserRepository::new();
        users.expect_count().returning(|| Ok(3));
        let mut jobs = MockJobRepository::new();
        jobs.expect_count().returning(|| Ok(2));
        let mut applications = MockApplicationRepository::new();
        applications.expect_count().returning(|| Ok(1));

        let service = AdminService::new(
            Arc::new(users),
            Arc::new(MockProfileRepository::new()),
            Arc::new(jobs),
            Arc::new(applications),
        );
        assert_eq!(
            service.stats().await.unwrap(),
            PlatformStats {
                users: 3,
                jobs: 2,
                applications: 1
            }
        );
    }

    #[tokio::test]
    async fn test_list_users_returns_summaries() {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .returning(|| Ok(vec![user(2, Role::Employer), user(3, Role::Candidate)]));

        let listed = service(users).list_users().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].role, Role::Employer);
        let json = serde_json::to_value(&listed[0]).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("headline").is_none());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, Role::Candidate))));
        users.expect_delete().times(1).returning(|_| Ok(true));

        service(users).delete_user(&admin(), 4).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_admin_is_forbidden() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, Role::Admin))));
        users.expect_delete().never();

        let err = service(users).delete_user(&admin(), 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Admin accounts cannot be deleted");
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let err = service(users).delete_user(&admin(), 9).await.unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound));
    }
}
