// ============================================================================
// Job Board Infrastructure - PostgreSQL User Repository
// File: crates/jobboard-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use jobboard_core::domain::{Gender, NewUser, Role, User};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::UserRepository;
use jobboard_shared::EntityId;

use super::db_error;
use super::unique_violation;

const USER_COLUMNS: &str = "id, email, password_hash, name, username, gender, role, headline, \
     bio, location, phone_number, skills, profile_picture, github_url, linkedin_url, \
     created_at, updated_at";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub username: Option<String>,
    pub gender: Option<String>,
    pub role: String,
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

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            name: row.name,
            username: row.username,
            gender: row.gender.as_deref().and_then(Gender::from_str),
            role: Role::from_str(&row.role).unwrap_or_default(),
            headline: row.headline,
            bio: row.bio,
            location: row.location,
            phone_number: row.phone_number,
            skills: row.skills,
            profile_picture: row.profile_picture,
            github_url: row.github_url,
            linkedin_url: row.linkedin_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn duplicate_user_error(constraint: &str, email: &str, username: Option<&str>) -> DomainError {
    if constraint == "users_username_key" {
        DomainError::UsernameAlreadyExists(username.unwrap_or_default().to_string())
    } else {
        DomainError::EmailAlreadyExists(email.to_string())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("finding user by id"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding user by email"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1"))
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("finding user by username"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (
                email, password_hash, name, username, gender, role,
                headline, bio, location, phone_number, skills
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.username)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(user.role.as_str())
        .bind(&user.headline)
        .bind(&user.bio)
        .bind(&user.location)
        .bind(&user.phone_number)
        .bind(&user.skills)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            if let Some(constraint) = unique_violation(&e) {
                return duplicate_user_error(&constraint, &user.email, user.username.as_deref());
            }
            error!("Database error creating user: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("User created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET
                email = $2,
                password_hash = $3,
                name = $4,
                username = $5,
                gender = $6,
                role = $7,
                headline = $8,
                bio = $9,
                location = $10,
                phone_number = $11,
                skills = $12,
                profile_picture = $13,
                github_url = $14,
                linkedin_url = $15,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.username)
        .bind(user.gender.map(|g| g.as_str()))
        .bind(user.role.as_str())
        .bind(&user.headline)
        .bind(&user.bio)
        .bind(&user.location)
        .bind(&user.phone_number)
        .bind(&user.skills)
        .bind(&user.profile_picture)
        .bind(&user.github_url)
        .bind(&user.linkedin_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            if let Some(constraint) = unique_violation(&e) {
                return duplicate_user_error(&constraint, &user.email, user.username.as_deref());
            }
            error!("Database error updating user: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|r| r.into()).ok_or(DomainError::UserNotFound)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing users"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting users"))
    }
}
