//! Session service
//!
//! Issues and verifies session tokens. There is no account store: whatever
//! identity the client presents is signed as-is, and logout is purely a
//! client-side cookie removal.

use nest_common::auth::{Claims, IssuedToken};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign `identity` into a session token
    #[instrument(skip(self, identity))]
    pub fn issue_session(&self, identity: Map<String, Value>) -> ServiceResult<IssuedToken> {
        let issued = self.ctx.jwt_service().issue(identity)?;

        info!(
            jti = %issued.claims.jti,
            email = issued.claims.email().unwrap_or_default(),
            "Session issued"
        );

        Ok(issued)
    }

    /// Validate a session token taken from the request cookie
    #[instrument(skip(self, token))]
    pub fn verify_session(&self, token: &str) -> ServiceResult<Claims> {
        let claims = self.ctx.jwt_service().verify(token)?;
        debug!(jti = %claims.jti, "Session verified");
        Ok(claims)
    }
}
