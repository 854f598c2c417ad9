//! Domain services (business logic)

pub mod auth_service;
pub mod job_service;
pub mod company_service;
pub mod application_service;
pub mod user_service;
pub mod admin_service;

use std::sync::Arc;

use jobboard_security::JwtService;

use crate::repositories::Repositories;

pub use auth_service::{AdminProvision, AuthService};
pub use job_service::JobService;
pub use company_service::CompanyService;
pub use application_service::ApplicationService;
pub use user_service::UserService;
pub use admin_service::AdminService;

/// Every service wired against one set of repositories
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub jobs: JobService,
    pub companies: CompanyService,
    pub applications: ApplicationService,
    pub users: UserService,
    pub admin: AdminService,
}

impl Services {
    pub fn new(repos: Repositories, jwt: Arc<JwtService>) -> Self {
        Self {
            auth: AuthService::new(repos.users.clone(), repos.profiles.clone(), jwt),
            jobs: JobService::new(repos.jobs.clone(), repos.companies.clone()),
            companies: CompanyService::new(repos.companies.clone()),
            applications: ApplicationService::new(repos.applications.clone(), repos.jobs.clone()),
            users: UserService::new(repos.users.clone(), repos.profiles.clone()),
            admin: AdminService::new(repos.users, repos.profiles, repos.jobs, repos.applications),
        }
    }
}
