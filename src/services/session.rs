// src/services/session.rs
//! Session token signing and verification
//!
//! Sessions are self-contained HS256 JWTs carrying the local user id; nothing
//! is stored server-side. Tokens expire after a configurable TTL.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// Signature mismatch, malformed token, or expired token.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),
}

#[derive(Debug, Clone)]
pub struct SessionService {
    jwt_secret: String,
    token_ttl: Duration,
}

impl SessionService {
    pub fn new(jwt_secret: String, token_ttl_hours: i64) -> Self {
        Self {
            jwt_secret,
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }

    /// Produce a signed session token embedding `user_id`.
    pub fn sign(&self, user_id: &str) -> Result<String, SessionError> {
        let exp = (Utc::now() + self.token_ttl).timestamp() as usize;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| SessionError::SigningFailed(e.to_string()))
    }

    /// Verify a session token and return the embedded user id.
    pub fn verify(&self, token: &str) -> Result<String, SessionError> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            warn!(error = %e, "Session token validation failed");
            SessionError::InvalidToken(e.to_string())
        })?;

        Ok(decoded.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new("test_secret_key".to_string(), 24)
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let svc = service();
        let token = svc.sign("U_K7NP3X").unwrap();
        let user_id = svc.verify(&token).unwrap();
        assert_eq!(user_id, "U_K7NP3X");
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let svc = service();
        let other = SessionService::new("another_secret".to_string(), 24);

        let token = svc.sign("U_K7NP3X").unwrap();
        let result = other.verify(&token);
        assert!(matches!(result, Err(SessionError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let svc = service();
        let token_a = svc.sign("U_AAAAAA").unwrap();
        let token_b = svc.sign("U_BBBBBB").unwrap();

        // Splice B's payload between A's header and signature
        let parts_a: Vec<&str> = token_a.split('.').collect();
        let parts_b: Vec<&str> = token_b.split('.').collect();
        let tampered = format!("{}.{}.{}", parts_a[0], parts_b[1], parts_a[2]);

        let result = svc.verify(&tampered);
        assert!(matches!(result, Err(SessionError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let svc = service();
        assert!(svc.verify("not.a.jwt").is_err());
        assert!(svc.verify("").is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // TTL of -2 hours puts exp well past the default validation leeway
        let svc = SessionService::new("test_secret_key".to_string(), -2);
        let token = svc.sign("U_K7NP3X").unwrap();

        let result = svc.verify(&token);
        assert!(matches!(result, Err(SessionError::InvalidToken(_))));
    }
}
