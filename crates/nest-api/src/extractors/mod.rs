//! Axum extractors for request handling
//!
//! Custom extractors for the session, path ids, query strings and JSON bodies.
//! Every rejection is an [`ApiError`](crate::response::ApiError).

mod auth;
mod json;
mod params;
mod path;

pub use auth::AuthUser;
pub use json::JsonBody;
pub use params::{EmailParams, ListParams, QueryParams, RecentParams};
pub use path::DocumentId;
