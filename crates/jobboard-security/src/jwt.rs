//! JWT token handling

use chrono::{Duration, Utc};
use jobboard_shared::EntityId;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

/// Bearer token claims: the subject user and the role it held when signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(rename = "userId")]
    pub user_id: EntityId,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiry_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_seconds,
        }
    }

    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }

    pub fn generate_token(&self, user_id: EntityId, role: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::ValidationError(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_validate_token() {
        let service = JwtService::new("test-secret", 86_400);
        let token = service.generate_token(42, "EMPLOYER").unwrap();

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "EMPLOYER");
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new("secret-a", 3600);
        let verifier = JwtService::new("secret-b", 3600);
        let token = issuer.generate_token(1, "CANDIDATE").unwrap();

        assert!(matches!(
            verifier.validate_token(&token),
            Err(JwtError::ValidationError(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the default 60s leeway.
        let service = JwtService::new("test-secret", -300);
        let token = service.generate_token(1, "CANDIDATE").unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = JwtService::new("test-secret", 3600);
        assert!(service.validate_token("not.a.token").is_err());
    }
}
