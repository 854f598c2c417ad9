//! Request and response contracts shared by the API and the client

pub mod auth;
pub mod jobs;
pub mod companies;
pub mod applications;
pub mod users;
pub mod common;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use jobs::{CreateJobRequest, UpdateJobRequest};
pub use companies::{CreateCompanyRequest, UpdateCompanyRequest};
pub use applications::{ApplyRequest, UpdateStatusRequest};
pub use users::{SkillsInput, UpdateProfileRequest};
pub use common::{
    deserialize_optional_id, describe_validation_errors, MessageResponse, PlatformStats,
    UploadResponse,
};
