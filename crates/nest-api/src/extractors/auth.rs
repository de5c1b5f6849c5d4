//! Session extractor
//!
//! Resolves the caller from the `token` cookie. On guarded routes the
//! `require_auth` middleware has already done this and left the result in the
//! request extensions.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use nest_common::{AppError, Claims};
use nest_service::AuthService;
use tracing::debug;

use crate::response::ApiError;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Decoded session claims, identity included
    pub claims: Claims,
}

impl AuthUser {
    /// Email from the session identity, if the client supplied one
    pub fn email(&self) -> Option<&str> {
        self.claims.email()
    }

    /// Verify the session cookie held in `jar`
    ///
    /// # Errors
    /// `MISSING_SESSION` without a cookie, `INVALID_SESSION` when the token
    /// fails verification
    pub fn from_jar(state: &AppState, jar: &CookieJar) -> Result<Self, ApiError> {
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::App(AppError::MissingAuth))?;

        let claims = AuthService::new(state.service_context())
            .verify_session(&token)
            .map_err(|e| {
                debug!(error = %e, "Session rejected");
                e
            })?;

        Ok(Self { claims })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let user = Self::from_jar(&app_state, &jar)?;

        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
