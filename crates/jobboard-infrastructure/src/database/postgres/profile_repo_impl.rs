// ============================================================================
// Job Board Infrastructure - PostgreSQL Profile Repository
// File: crates/jobboard-infrastructure/src/database/postgres/profile_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{error, warn};

use jobboard_core::domain::{JobPreferences, NewProfile, Profile, ProfileStats, WorkExperience};
use jobboard_core::error::DomainError;
use jobboard_core::repositories::ProfileRepository;
use jobboard_shared::EntityId;

use super::db_error;
use super::rows::{ProfileRow, PROFILE_COLUMNS};
use super::unique_violation;

pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_user(&self, user_id: EntityId) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding profile"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, profile: &NewProfile) -> Result<Profile, DomainError> {
        let result: Result<ProfileRow, sqlx::Error> = sqlx::query_as(&format!(
            r#"
            INSERT INTO profiles (
                user_id, bio, skills, company_name, company_url,
                work_experience, job_preferences, profile_stats
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.user_id)
        .bind(&profile.bio)
        .bind(&profile.skills)
        .bind(&profile.company_name)
        .bind(&profile.company_url)
        .bind(Json(Vec::<WorkExperience>::new()))
        .bind(Json(JobPreferences::default()))
        .bind(Json(ProfileStats::default()))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            // Two concurrent first reads may both try to create the profile.
            Err(e) if unique_violation(&e).is_some() => {
                warn!(user_id = profile.user_id, "Profile already exists, reloading");
                self.find_by_user(profile.user_id)
                    .await?
                    .ok_or(DomainError::UserNotFound)
            }
            Err(e) => {
                error!("Database error creating profile: {}", e);
                Err(DomainError::DatabaseError(e.to_string()))
            }
        }
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(&format!(
            r#"
            UPDATE profiles
            SET
                bio = $2,
                resume_url = $3,
                skills = $4,
                company_name = $5,
                company_url = $6,
                work_experience = $7,
                job_preferences = $8,
                profile_stats = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(profile.id)
        .bind(&profile.bio)
        .bind(&profile.resume_url)
        .bind(&profile.skills)
        .bind(&profile.company_name)
        .bind(&profile.company_url)
        .bind(Json(&profile.work_experience))
        .bind(Json(&profile.job_preferences))
        .bind(Json(&profile.profile_stats))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating profile"))?;

        row.map(|r| r.into()).ok_or(DomainError::UserNotFound)
    }
}
