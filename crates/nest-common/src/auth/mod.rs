//! Session token utilities

mod jwt;

pub use jwt::{Claims, IssuedToken, JwtService, SESSION_TOKEN_TTL_SECS};
