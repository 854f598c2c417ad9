//! Row types shared by several repositories

use chrono::{DateTime, Utc};
use jobboard_core::domain::{
    Application, ApplicationStatus, CompanySummary, EmployerContact, Job, JobPreferences,
    JobType, JobWithRelations, Profile, ProfileStats, WorkExperience,
};
use sqlx::types::Json;
use sqlx::FromRow;

pub(crate) const JOB_COLUMNS: &str = "j.id, j.title, j.description, j.requirements, j.salary, \
     j.location, j.job_type, j.employer_id, j.company_id, j.created_at, j.updated_at";

pub(crate) const PROFILE_COLUMNS: &str = "id, user_id, bio, resume_url, skills, company_name, \
     company_url, work_experience, job_preferences, profile_stats, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct JobRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub location: String,
    pub job_type: String,
    pub employer_id: i32,
    pub company_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: row.id,
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            salary: row.salary,
            location: row.location,
            job_type: JobType::from_str(&row.job_type).unwrap_or_default(),
            employer_id: row.employer_id,
            company_id: row.company_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Job joined with its employer and (left-joined) company
#[derive(Debug, FromRow)]
pub(crate) struct JobListingRow {
    #[sqlx(flatten)]
    pub job: JobRow,
    pub employer_name: Option<String>,
    pub employer_email: Option<String>,
    pub company_ref_id: Option<i32>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub company_location: Option<String>,
}

impl From<JobListingRow> for JobWithRelations {
    fn from(row: JobListingRow) -> Self {
        let employer = match (row.employer_name, row.employer_email) {
            (Some(name), Some(email)) => Some(EmployerContact { name, email }),
            _ => None,
        };
        let company = match (row.company_ref_id, row.company_name) {
            (Some(id), Some(name)) => Some(CompanySummary {
                id,
                name,
                logo: row.company_logo,
                location: row.company_location,
            }),
            _ => None,
        };
        JobWithRelations {
            job: row.job.into(),
            employer,
            company,
        }
    }
}

pub(crate) fn job_listing_select() -> String {
    format!(
        r#"
        SELECT {JOB_COLUMNS},
               u.name AS employer_name, u.email AS employer_email,
               c.id AS company_ref_id, c.name AS company_name,
               c.logo AS company_logo, c.location AS company_location
        FROM jobs j
        LEFT JOIN users u ON u.id = j.employer_id
        LEFT JOIN companies c ON c.id = j.company_id
        "#
    )
}

#[derive(Debug, FromRow)]
pub(crate) struct ApplicationRow {
    pub id: i32,
    pub job_id: i32,
    pub candidate_id: i32,
    pub status: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        Application {
            id: row.id,
            job_id: row.job_id,
            candidate_id: row.candidate_id,
            status: ApplicationStatus::from_str(&row.status).unwrap_or_default(),
            resume_url: row.resume_url,
            cover_letter: row.cover_letter,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct ProfileRow {
    pub id: i32,
    pub user_id: i32,
    pub bio: Option<String>,
    pub resume_url: Option<String>,
    pub skills: Vec<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub work_experience: Json<Vec<WorkExperience>>,
    pub job_preferences: Json<JobPreferences>,
    pub profile_stats: Json<ProfileStats>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            user_id: row.user_id,
            bio: row.bio,
            resume_url: row.resume_url,
            skills: row.skills,
            company_name: row.company_name,
            company_url: row.company_url,
            work_experience: row.work_experience.0,
            job_preferences: row.job_preferences.0,
            profile_stats: row.profile_stats.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
