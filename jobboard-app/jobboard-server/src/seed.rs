//! Demo data for local development

use anyhow::{Context, Result};
use jobboard_core::domain::{Actor, Role};
use jobboard_core::dto::{
    CreateCompanyRequest, CreateJobRequest, RegisterRequest, SkillsInput, UpdateProfileRequest,
};
use jobboard_core::services::Services;
use jobboard_core::Repositories;
use tracing::info;

pub const DEMO_PASSWORD: &str = "password123";

const ADMIN_EMAIL: &str = "admin@example.com";
const EMPLOYER_EMAIL: &str = "employer@techcorp.com";
const CANDIDATE_EMAIL: &str = "candidate@example.com";

/// Inserts the demo accounts, company and jobs. Accounts that already exist
/// are left alone, so running it twice is harmless.
pub async fn seed_demo_data(services: &Services, repos: &Repositories) -> Result<()> {
    services
        .auth
        .ensure_admin(ADMIN_EMAIL, DEMO_PASSWORD, "Admin User")
        .await
        .context("creating admin")?;

    if repos.users.find_by_email(EMPLOYER_EMAIL).await?.is_none() {
        seed_employer(services).await.context("seeding employer")?;
    }
    if repos.users.find_by_email(CANDIDATE_EMAIL).await?.is_none() {
        seed_candidate(services).await.context("seeding candidate")?;
    }

    info!("Demo data ready; every account uses password {}", DEMO_PASSWORD);
    Ok(())
}

async fn seed_employer(services: &Services) -> Result<()> {
    let auth = services
        .auth
        .register(RegisterRequest {
            email: Some(EMPLOYER_EMAIL.into()),
            password: Some(DEMO_PASSWORD.into()),
            name: Some("John Doe (Tech Corp)".into()),
            role: Some(Role::Employer.as_str().into()),
            location: Some("San Francisco, CA".into()),
            ..Default::default()
        })
        .await?;
    let actor = Actor::new(auth.user.id, Role::Employer);

    services
        .users
        .update_profile(
            &actor,
            UpdateProfileRequest {
                headline: Some("Senior Recruiter at Tech Corp".into()),
                bio: Some("We are looking for top talent.".into()),
                ..Default::default()
            },
        )
        .await?;

    let company = services
        .companies
        .create(
            &actor,
            CreateCompanyRequest {
                name: Some("Tech Corp".into()),
                description: Some("Leading innovator in tech.".into()),
                website: Some("https://techcorp.com".into()),
                location: Some("San Francisco, CA".into()),
                logo: None,
            },
        )
        .await?;

    let jobs = [
        (
            "Senior Frontend Developer",
            "We need a React expert with 5+ years of experience.",
            "React, TypeScript, Tailwind CSS",
            "$120k - $150k",
            "Remote",
        ),
        (
            "Backend Engineer",
            "Rust and PostgreSQL experience required.",
            "Rust, axum, PostgreSQL, sqlx",
            "$130k - $160k",
            "San Francisco, CA",
        ),
    ];
    for (title, description, requirements, salary, location) in jobs {
        services
            .jobs
            .create(
                &actor,
                CreateJobRequest {
                    title: Some(title.into()),
                    description: Some(description.into()),
                    requirements: Some(requirements.into()),
                    salary: Some(salary.into()),
                    location: Some(location.into()),
                    job_type: Some("FULL_TIME".into()),
                    company_id: Some(company.id),
                },
            )
            .await?;
    }
    Ok(())
}

async fn seed_candidate(services: &Services) -> Result<()> {
    let auth = services
        .auth
        .register(RegisterRequest {
            email: Some(CANDIDATE_EMAIL.into()),
            password: Some(DEMO_PASSWORD.into()),
            name: Some("Jane Smith".into()),
            location: Some("Austin, TX".into()),
            ..Default::default()
        })
        .await?;

    services
        .users
        .update_profile(
            &Actor::new(auth.user.id, Role::Candidate),
            UpdateProfileRequest {
                headline: Some("Full Stack Developer".into()),
                bio: Some("Passionate developer looking for new opportunities.".into()),
                skills: Some(SkillsInput::List(vec![
                    "React".into(),
                    "Node.js".into(),
                    "TypeScript".into(),
                    "PostgreSQL".into(),
                ])),
                ..Default::default()
            },
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::domain::JobFilter;
    use jobboard_infrastructure::MemoryStore;
    use jobboard_security::JwtService;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repos = MemoryStore::new().repositories();
        let services = Services::new(repos.clone(), Arc::new(JwtService::new("test-secret", 3600)));

        seed_demo_data(&services, &repos).await.unwrap();
        seed_demo_data(&services, &repos).await.unwrap();

        assert_eq!(repos.users.count().await.unwrap(), 3);
        let jobs = services.jobs.list(&JobFilter::default()).await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert!(jobs
            .iter()
            .all(|j| j.company.as_ref().map(|c| c.name.as_str()) == Some("Tech Corp")));
    }
}
