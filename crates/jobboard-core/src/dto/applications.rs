//! Application request payloads

use jobboard_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::deserialize_optional_id;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub job_id: Option<EntityId>,
    #[validate(length(max = 10000, message = "Cover letter must be at most 10000 characters"))]
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}
