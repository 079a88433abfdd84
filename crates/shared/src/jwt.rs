//! Bearer token verification for the hosted auth provider.
//!
//! The provider signs access tokens with HS256 using a project secret. This
//! module only verifies them and reads the role claims; users and sessions are
//! owned by the provider.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role value that grants access to the admin API.
pub const ADMIN_ROLE: &str = "admin";

/// Default leeway in seconds for clock skew tolerance
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Error type for JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Failed to decode token: {0}")]
    DecodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Free-form metadata object carried by provider tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Claims read from a provider-issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject (user ID at the provider)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Database role assigned by the provider, usually "authenticated".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<RoleMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<RoleMetadata>,
}

impl AuthClaims {
    /// Builds claims for `sub` that expire `ttl_secs` from now.
    pub fn new(sub: impl Into<String>, ttl_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.into(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            iat: now.timestamp(),
            aud: Some("authenticated".to_string()),
            email: None,
            role: Some("authenticated".to_string()),
            user_metadata: None,
            app_metadata: None,
        }
    }

    /// Marks the claims as belonging to an administrator.
    pub fn with_admin_role(mut self) -> Self {
        self.app_metadata = Some(RoleMetadata {
            role: Some(ADMIN_ROLE.to_string()),
            name: None,
        });
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Whether `app_metadata` carries the admin role.
    ///
    /// `user_metadata` is writable by the account holder and is never
    /// consulted here.
    pub fn is_admin(&self) -> bool {
        self.app_metadata
            .as_ref()
            .and_then(|m| m.role.as_deref())
            .map(|r| r == ADMIN_ROLE)
            .unwrap_or(false)
    }
}

/// Verifies (and, for tooling, issues) HS256 tokens with the provider secret.
#[derive(Clone)]
pub struct JwtVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    leeway_secs: u64,
    audience: Option<String>,
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("leeway_secs", &self.leeway_secs)
            .field("audience", &self.audience)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl JwtVerifier {
    /// Creates a verifier from the provider's signing secret.
    pub fn new(secret: &str, leeway_secs: u64, audience: Option<String>) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidKey("JWT secret must not be empty".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway_secs,
            audience: audience.filter(|a| !a.is_empty()),
        })
    }

    /// Signs the given claims. The service itself never hands these out.
    pub fn issue(&self, claims: &AuthClaims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<AuthClaims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = self.leeway_secs;
        match &self.audience {
            Some(aud) => validation.set_audience(&[aud.as_str()]),
            None => validation.validate_aud = false,
        }

        let token_data =
            decode::<AuthClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature
                    | jsonwebtoken::errors::ErrorKind::InvalidAudience => JwtError::InvalidToken,
                    _ => JwtError::DecodingError(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
