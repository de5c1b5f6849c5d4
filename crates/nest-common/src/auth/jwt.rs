//! Session tokens
//!
//! A session token is an HS256 JWT carrying whatever identity object the
//! client presented at login, plus `iat`, `exp` and a `jti`. The identity is
//! signed as-is: nothing checks that it holds a well-formed email.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::AppError;

/// Session lifetime: 3 hours
pub const SESSION_TOKEN_TTL_SECS: i64 = 3 * 60 * 60;

/// Claim names owned by the issuer; identity keys with these names are replaced
const RESERVED_CLAIMS: [&str; 3] = ["iat", "exp", "jti"];

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token id, for log correlation only; nothing is revoked server-side
    pub jti: String,
    /// Caller-supplied identity payload
    #[serde(flatten)]
    pub identity: Map<String, Value>,
}

impl Claims {
    /// The `email` entry of the identity, when present and a string
    pub fn email(&self) -> Option<&str> {
        self.identity.get("email").and_then(Value::as_str)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A freshly signed session token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
    pub claims: Claims,
}

/// JWT service for issuing and verifying session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and session lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, session_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session_expiry,
        }
    }

    /// Session lifetime in seconds
    pub fn session_expiry(&self) -> i64 {
        self.session_expiry
    }

    /// Sign `identity` into a session token expiring after the configured lifetime
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, mut identity: Map<String, Value>) -> Result<IssuedToken, AppError> {
        for claim in RESERVED_CLAIMS {
            identity.remove(claim);
        }

        let now = Utc::now();
        let claims = Claims {
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.session_expiry)).timestamp(),
            jti: Uuid::new_v4().to_string(),
            identity,
        };

        let token = self.sign(&claims)?;

        Ok(IssuedToken {
            token,
            expires_in: self.session_expiry,
            claims,
        })
    }

    /// Decode and validate a session token
    ///
    /// # Errors
    /// `TokenExpired` once `exp` has passed, `InvalidToken` for anything else
    /// that fails signature or format checks
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("session_expiry", &self.session_expiry)
            .finish_non_exhaustive()
    }
}
