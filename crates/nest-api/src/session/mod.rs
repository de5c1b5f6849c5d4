//! Session cookie
//!
//! The session token travels in a single cookie named `token`. It carries no
//! `Max-Age`, so browsers drop it with the session; the JWT `exp` bounds it
//! server-side.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// Build the cookie carrying a freshly issued session token
///
/// Production deployments serve the client from another origin, so the cookie
/// must be `Secure` and `SameSite=None` to be sent cross-site.
pub fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    let builder = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/");

    if production {
        builder.secure(true).same_site(SameSite::None).build()
    } else {
        builder.same_site(SameSite::Lax).build()
    }
}

/// Build a cookie that clears the session token on the client
pub fn removal_cookie(production: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), production);
    cookie.make_removal();
    cookie
}
