//! Job request payloads

use jobboard_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::deserialize_optional_id;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    /// One of FULL_TIME, PART_TIME, CONTRACT, INTERNSHIP, REMOTE; FULL_TIME when absent.
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub company_id: Option<EntityId>,
}

/// Partial update; only supplied fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_id: Option<EntityId>,
}
