//! Session guard
//!
//! Installed with `from_fn_with_state` on the route groups listed in
//! `AUTH_GUARDED_ROUTES`. A request without a valid session cookie is
//! answered with 401 before the handler runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::Span;

use crate::extractors::AuthUser;
use crate::response::ApiError;
use crate::state::AppState;

/// Reject the request unless it carries a valid session cookie
///
/// The verified caller is stored in the request extensions, where the
/// [`AuthUser`] extractor picks it up.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = AuthUser::from_jar(&state, &jar)?;

    Span::current().record("session", user.claims.jti.as_str());
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
