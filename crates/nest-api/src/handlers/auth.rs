//! Session handlers
//!
//! Endpoints for issuing and clearing the session cookie.

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use nest_service::{dto::SessionResponse, AuthService};
use serde_json::{Map, Value};

use crate::extractors::JsonBody;
use crate::response::ApiResult;
use crate::session::{removal_cookie, session_cookie};
use crate::state::AppState;

/// Sign the posted identity and set it as the session cookie
///
/// POST /query/jwt
pub async fn issue_session(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(identity): JsonBody<Map<String, Value>>,
) -> ApiResult<(CookieJar, Json<SessionResponse>)> {
    let issued = AuthService::new(state.service_context()).issue_session(identity)?;
    let jar = jar.add(session_cookie(issued.token, state.is_production()));

    Ok((jar, Json(SessionResponse::ok())))
}

/// Clear the session cookie
///
/// POST /logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<SessionResponse>) {
    let jar = jar.add(removal_cookie(state.is_production()));
    (jar, Json(SessionResponse::ok()))
}
