//! # Job Board Core - Domain Module
//! 
//! Domain entities for the job board.

pub mod user;
pub mod profile;
pub mod company;
pub mod job;
pub mod application;
pub mod actor;

// Re-export all entities and enums
pub use user::{Gender, NewUser, Role, User, UserChanges, UserInfo, UserSummary, UserWithProfile};
pub use profile::{JobPreferences, NewProfile, Profile, ProfileStats, WorkExperience};
pub use company::{Company, CompanyWithEmployer, EmployerContact, NewCompany};
pub use job::{CompanySummary, EmployerJob, Job, JobFilter, JobType, JobWithRelations, NewJob};
pub use application::{
    Application, ApplicationStatus, ApplicationWithCandidate, ApplicationWithJob,
    CandidateSummary, JobSummary, NewApplication,
};
pub use actor::Actor;
