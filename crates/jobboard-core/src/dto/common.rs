//! Small response bodies and deserialization helpers

use jobboard_shared::EntityId;
use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidationErrors;

/// `{ "message": "..." }` acknowledgement body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Platform-wide counters for the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub users: i64,
    pub jobs: i64,
    pub applications: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Number(i64),
    Text(String),
}

/// Accepts an id sent either as a JSON number or as a numeric string
/// (form fields arrive as strings). `null`, absent and blank all mean `None`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = match Option::<IdInput>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(IdInput::Number(n)) => n,
        Some(IdInput::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(IdInput::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid id: {s}")))?,
    };

    EntityId::try_from(raw)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("id out of range: {raw}")))
}

/// Flattens field validation failures into one readable message.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value for {field}"),
            })
        })
        .collect();

    if messages.is_empty() {
        "Invalid request".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        id: Option<EntityId>,
    }

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 2, message = "Name is too short"))]
        name: String,
        #[validate(length(max = 3))]
        code: String,
    }

    #[test]
    fn test_id_accepts_number_and_string() {
        let a: Body = serde_json::from_str(r#"{"id": 12}"#).unwrap();
        let b: Body = serde_json::from_str(r#"{"id": " 12 "}"#).unwrap();
        let c: Body = serde_json::from_str(r#"{}"#).unwrap();
        let d: Body = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(a.id, Some(12));
        assert_eq!(b.id, Some(12));
        assert_eq!(c.id, None);
        assert_eq!(d.id, None);
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!(serde_json::from_str::<Body>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"id": 99999999999}"#).is_err());
    }

    #[test]
    fn test_describe_validation_errors() {
        let named = Named {
            name: "a".into(),
            code: "abcd".into(),
        };
        let errors = named.validate().unwrap_err();
        assert_eq!(
            describe_validation_errors(&errors),
            "Invalid value for code; Name is too short"
        );
    }
}
