//! Session token generation and validation.
//!
//! Sessions are stateless: the cookie holds a signed JWT with the user id and type.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::{SessionConfig, auth::Claims, types::UserId};

/// Errors that can occur during token operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,
}

/// Token service for session operations.
#[derive(Clone)]
pub struct JwtService {
    expiry_secs: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiry_secs", &self.expiry_secs)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new token service from the session configuration.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            expiry_secs: i64::try_from(config.expiry_secs).unwrap_or(i64::MAX),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Generates a session token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails or the
    /// configured lifetime does not fit a timestamp.
    pub fn generate_session_token(&self, user_id: UserId, role: &str) -> Result<String, JwtError> {
        let expires_at = Duration::try_seconds(self.expiry_secs)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| {
                JwtError::EncodingError(format!(
                    "session lifetime of {}s is out of range",
                    self.expiry_secs
                ))
            })?;
        let claims = Claims::new(user_id, role, expires_at);
        self.encode_claims(&claims)
    }

    /// Signs arbitrary claims.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::DecodingError` if the token is malformed or badly signed.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }

    /// Returns the session lifetime in seconds.
    #[must_use]
    pub const fn expires_in(&self) -> i64 {
        self.expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(&SessionConfig {
            secret: "test-secret-key-for-testing".to_string(),
            ..SessionConfig::default()
        })
    }

    #[test]
    fn test_generate_and_validate_session_token() {
        let service = create_test_service();

        let token = service
            .generate_session_token(UserId::new(7), "admin")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id(), UserId::new(7));
        assert_eq!(claims.role, "admin");
        assert!((3599..=3600).contains(&(claims.exp - claims.iat)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();
        let claims = Claims::new(UserId::new(7), "admin", Utc::now() - Duration::hours(2));
        let token = service.encode_claims(&claims).unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::Expired)
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let other = JwtService::new(&SessionConfig {
            secret: "another-secret".to_string(),
            ..SessionConfig::default()
        });
        let token = other
            .generate_session_token(UserId::new(1), "admin")
            .unwrap();

        assert!(matches!(
            create_test_service().validate_token(&token),
            Err(JwtError::DecodingError(_))
        ));
    }

    #[test]
    fn test_oversized_lifetime_is_an_error() {
        let service = JwtService::new(&SessionConfig {
            secret: "test-secret-key-for-testing".to_string(),
            expiry_secs: u64::MAX,
            ..SessionConfig::default()
        });

        assert!(matches!(
            service.generate_session_token(UserId::new(7), "admin"),
            Err(JwtError::EncodingError(_))
        ));
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        assert!(service.validate_token("invalid.token.here").is_err());
    }
}
