//! In-memory store
//!
//! Same contracts as the PostgreSQL repositories (unique keys, cascades,
//! newest-first ordering) behind one `RwLock`. Used for `memory://`
//! databases and for tests that exercise the HTTP surface.

mod users;
mod profiles;
mod companies;
mod jobs;
mod applications;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use jobboard_core::domain::{
    Application, ApplicationWithCandidate, CandidateSummary, Company, CompanySummary,
    EmployerContact, Job, JobSummary, JobWithRelations, Profile, User,
};
use jobboard_core::Repositories;
use jobboard_shared::EntityId;

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository handles that all share this store.
    pub fn repositories(&self) -> Repositories {
        let store = Arc::new(self.clone());
        Repositories {
            users: store.clone(),
            profiles: store.clone(),
            companies: store.clone(),
            jobs: store.clone(),
            applications: store,
        }
    }
}

#[derive(Default)]
struct Sequences {
    users: EntityId,
    profiles: EntityId,
    companies: EntityId,
    jobs: EntityId,
    applications: EntityId,
}

fn next_id(counter: &mut EntityId) -> EntityId {
    *counter += 1;
    *counter
}

#[derive(Default)]
struct Tables {
    seq: Sequences,
    users: BTreeMap<EntityId, User>,
    profiles: BTreeMap<EntityId, Profile>,
    companies: BTreeMap<EntityId, Company>,
    jobs: BTreeMap<EntityId, Job>,
    applications: BTreeMap<EntityId, Application>,
}

impl Tables {
    fn employer_contact(&self, user_id: EntityId) -> Option<EmployerContact> {
        self.users.get(&user_id).map(|u| EmployerContact {
            name: u.name.clone(),
            email: u.email.clone(),
        })
    }

    fn profile_of(&self, user_id: EntityId) -> Option<&Profile> {
        self.profiles.values().find(|p| p.user_id == user_id)
    }

    fn listing(&self, job: &Job) -> JobWithRelations {
        let company = job
            .company_id
            .and_then(|id| self.companies.get(&id))
            .map(|c| CompanySummary {
                id: c.id,
                name: c.name.clone(),
                logo: c.logo.clone(),
                location: c.location.clone(),
            });

        JobWithRelations {
            job: job.clone(),
            employer: self.employer_contact(job.employer_id),
            company,
        }
    }

    fn candidate_view(
        &self,
        application: &Application,
        with_job: bool,
    ) -> ApplicationWithCandidate {
        let job = if with_job {
            self.jobs.get(&application.job_id).map(|j| JobSummary {
                id: j.id,
                title: j.title.clone(),
                location: j.location.clone(),
                job_type: j.job_type,
            })
        } else {
            None
        };
        let candidate = self
            .users
            .get(&application.candidate_id)
            .map(|u| CandidateSummary {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
                profile: self.profile_of(u.id).cloned(),
            });

        ApplicationWithCandidate {
            application: application.clone(),
            job,
            candidate,
        }
    }

    /// Removes a user and everything that references it.
    fn delete_user_cascade(&mut self, user_id: EntityId) -> bool {
        if self.users.remove(&user_id).is_none() {
            return false;
        }

        self.profiles.retain(|_, p| p.user_id != user_id);

        let removed_companies: Vec<EntityId> = self
            .companies
            .values()
            .filter(|c| c.employer_id == user_id)
            .map(|c| c.id)
            .collect();
        self.companies.retain(|_, c| c.employer_id != user_id);

        let removed_jobs: Vec<EntityId> = self
            .jobs
            .values()
            .filter(|j| j.employer_id == user_id)
            .map(|j| j.id)
            .collect();
        self.jobs.retain(|_, j| j.employer_id != user_id);
        for job in self.jobs.values_mut() {
            if job.company_id.is_some_and(|id| removed_companies.contains(&id)) {
                job.company_id = None;
            }
        }

        self.applications
            .retain(|_, a| a.candidate_id != user_id && !removed_jobs.contains(&a.job_id));
        true
    }
}

/// Newest first, ties broken by id so equal timestamps stay deterministic.
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, EntityId)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::domain::{
        ApplicationStatus, JobFilter, JobType, NewApplication, NewCompany, NewJob, NewProfile,
        NewUser, Role,
    };
    use jobboard_core::error::DomainError;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    async fn user(repos: &Repositories, role: Role) -> User {
        let email: String = SafeEmail().fake();
        let user = repos
            .users
            .create(&NewUser::new(email, "hash".into(), Name().fake(), role))
            .await
            .unwrap();
        repos.profiles.create(&NewProfile::empty(user.id)).await.unwrap();
        user
    }

    async fn company(repos: &Repositories, employer_id: EntityId, name: &str) -> Company {
        repos
            .companies
            .create(&NewCompany {
                name: name.into(),
                employer_id,
                ..Default::default()
            })
            .await
            .unwrap()
    }

    async fn job(
        repos: &Repositories,
        employer_id: EntityId,
        company_id: EntityId,
        title: &str,
    ) -> Job {
        repos
            .jobs
            .create(&NewJob {
                title: title.into(),
                description: "desc".into(),
                location: "Remote".into(),
                job_type: JobType::FullTime,
                employer_id,
                company_id: Some(company_id),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    async fn apply(
        repos: &Repositories,
        job_id: EntityId,
        candidate_id: EntityId,
    ) -> Result<Application, DomainError> {
        repos
            .applications
            .create(&NewApplication {
                job_id,
                candidate_id,
                ..Default::default()
            })
            .await
    }

    #[tokio::test]
    async fn test_unique_email_and_username() {
        let repos = MemoryStore::new().repositories();
        let mut new_user =
            NewUser::new("a@b.com".into(), "hash".into(), "A".into(), Role::Candidate);
        new_user.username = Some("alice".into());
        repos.users.create(&new_user).await.unwrap();

        let err = repos.users.create(&new_user).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));

        new_user.email = "other@b.com".into();
        let err = repos.users.create(&new_user).await.unwrap_err();
        assert!(matches!(err, DomainError::UsernameAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_duplicate_application_is_rejected() {
        let repos = MemoryStore::new().repositories();
        let employer = user(&repos, Role::Employer).await;
        let candidate = user(&repos, Role::Candidate).await;
        let acme = company(&repos, employer.id, "Acme").await;
        let posted = job(&repos, employer.id, acme.id, "Engineer").await;

        let first = apply(&repos, posted.id, candidate.id).await.unwrap();
        assert_eq!(first.status, ApplicationStatus::Applied);
        let err = apply(&repos, posted.id, candidate.id).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyApplied));
    }

    #[tokio::test]
    async fn test_employer_jobs_report_application_counts() {
        let repos = MemoryStore::new().repositories();
        let employer = user(&repos, Role::Employer).await;
        let acme = company(&repos, employer.id, "Acme").await;
        let older = job(&repos, employer.id, acme.id, "Older").await;
        let newer = job(&repos, employer.id, acme.id, "Newer").await;
        for _ in 0..2 {
            let candidate = user(&repos, Role::Candidate).await;
            apply(&repos, older.id, candidate.id).await.unwrap();
        }

        let listed = repos.jobs.list_by_employer(employer.id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].job.id, newer.id);
        assert_eq!(listed[0].application_count, 0);
        assert_eq!(listed[1].application_count, 2);
    }

    #[tokio::test]
    async fn test_job_listing_filters() {
        let repos = MemoryStore::new().repositories();
        let employer = user(&repos, Role::Employer).await;
        let acme = company(&repos, employer.id, "Acme Labs").await;
        let globex = company(&repos, employer.id, "Globex").await;
        job(&repos, employer.id, acme.id, "Rust Engineer").await;
        job(&repos, employer.id, globex.id, "Designer").await;

        let all = repos.jobs.list(&JobFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].job.title, "Designer");
        assert_eq!(all[0].company.as_ref().unwrap().name, "Globex");

        let by_company = repos
            .jobs
            .list(&JobFilter {
                company_id: Some(acme.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_company.len(), 1);

        let by_search = repos
            .jobs
            .list(&JobFilter {
                search: Some("acme".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].job.title, "Rust Engineer");
    }

    #[tokio::test]
    async fn test_deleting_user_cascades() {
        let repos = MemoryStore::new().repositories();
        let employer = user(&repos, Role::Employer).await;
        let candidate = user(&repos, Role::Candidate).await;
        let acme = company(&repos, employer.id, "Acme").await;
        let posted = job(&repos, employer.id, acme.id, "Engineer").await;
        apply(&repos, posted.id, candidate.id).await.unwrap();

        assert!(repos.users.delete(employer.id).await.unwrap());
        assert!(repos.jobs.find_by_id(posted.id).await.unwrap().is_none());
        assert!(repos.companies.find_by_id(acme.id).await.unwrap().is_none());
        assert_eq!(repos.applications.count().await.unwrap(), 0);
        assert!(repos.profiles.find_by_user(employer.id).await.unwrap().is_none());
        assert!(!repos.users.delete(employer.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_employer_inbox_includes_candidate_profile() {
        let repos = MemoryStore::new().repositories();
        let employer = user(&repos, Role::Employer).await;
        let candidate = user(&repos, Role::Candidate).await;
        let acme = company(&repos, employer.id, "Acme").await;
        let posted = job(&repos, employer.id, acme.id, "Engineer").await;
        apply(&repos, posted.id, candidate.id).await.unwrap();

        let inbox = repos.applications.list_by_employer(employer.id).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].job.as_ref().unwrap().title, "Engineer");
        let applicant = inbox[0].candidate.as_ref().unwrap();
        assert_eq!(applicant.id, candidate.id);
        assert!(applicant.profile.is_some());

        let per_job = repos.applications.list_by_job(posted.id).await.unwrap();
        assert!(per_job[0].job.is_none());

        let mine = repos.applications.list_by_candidate(candidate.id).await.unwrap();
        let listing = mine[0].job.as_ref().unwrap();
        assert_eq!(listing.employer.as_ref().unwrap().name, employer.name);
    }
}
