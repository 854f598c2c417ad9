use async_trait::async_trait;
use chrono::Utc;

use jobboard_core::domain::{NewUser, User};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::UserRepository;
use jobboard_shared::EntityId;

use super::{newest_first, next_id, MemoryStore, Tables};

fn check_unique(
    tables: &Tables,
    email: &str,
    username: Option<&str>,
    except: Option<EntityId>,
) -> Result<(), DomainError> {
    for user in tables.users.values().filter(|u| Some(u.id) != except) {
        if user.email.eq_ignore_ascii_case(email) {
            return Err(DomainError::EmailAlreadyExists(email.to_string()));
        }
        if username.is_some() && user.username.as_deref() == username {
            return Err(DomainError::UsernameAlreadyExists(
                username.unwrap_or_default().to_string(),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read();
        Ok(tables
            .users
            .values()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.write();
        check_unique(&tables, &user.email, user.username.as_deref(), None)?;

        let now = Utc::now();
        let created = User {
            id: next_id(&mut tables.seq.users),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            gender: user.gender,
            role: user.role,
            headline: user.headline.clone(),
            bio: user.bio.clone(),
            location: user.location.clone(),
            phone_number: user.phone_number.clone(),
            skills: user.skills.clone(),
            profile_picture: None,
            github_url: None,
            linkedin_url: None,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write();
        check_unique(&tables, &user.email, user.username.as_deref(), Some(user.id))?;

        let stored = tables
            .users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound)?;
        let created_at = stored.created_at;
        *stored = User {
            created_at,
            updated_at: Utc::now(),
            ..user.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        Ok(self.tables.write().delete_user_cascade(id))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self.tables.read().users.values().cloned().collect();
        newest_first(&mut users, |u| (u.created_at, u.id));
        Ok(users)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.tables.read().users.len() as i64)
    }
}
