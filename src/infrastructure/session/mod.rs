//! Signed session tokens
//!
//! Sessions are stateless: a signed HS256 token carrying the login key and
//! an expiry, delivered to the browser in an HttpOnly cookie. The cookie
//! transport lives in `api::middleware`; this module only signs and
//! validates.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::identity::Identity;
use crate::domain::DomainError;

/// Session claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (login key)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Create new claims for an identity
    pub fn new(identity: &Identity, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: identity.login().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Login key of the session's identity
    pub fn login(&self) -> &str {
        &self.sub
    }
}

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Session lifetime in hours
    pub expiration_hours: u64,
}

impl SessionConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_hours: 24,
        }
    }
}

/// Session token service
#[derive(Clone)]
pub struct SessionService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("keys", &"[hidden]")
            .finish()
    }
}

impl SessionService {
    /// Create a new session service with the given configuration
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a session token for an identity
    pub fn issue(&self, identity: &Identity) -> Result<String, DomainError> {
        let claims = SessionClaims::new(identity, self.config.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign session token: {}", e)))
    }

    /// Validate a session token and return its claims
    pub fn validate(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| DomainError::credential(format!("Invalid session: {}", e)))?;

        Ok(token_data.claims)
    }

    /// Session lifetime in hours
    pub fn expiration_hours(&self) -> u64 {
        self.config.expiration_hours
    }
}
