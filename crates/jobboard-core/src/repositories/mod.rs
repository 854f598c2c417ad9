//! Repository traits (ports)

pub mod user_repository;
pub mod profile_repository;
pub mod company_repository;
pub mod job_repository;
pub mod application_repository;

use std::sync::Arc;

pub use user_repository::UserRepository;
pub use profile_repository::ProfileRepository;
pub use company_repository::CompanyRepository;
pub use job_repository::JobRepository;
pub use application_repository::ApplicationRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use application_repository::MockApplicationRepository;

/// One handle per aggregate, shared by every service.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
}
