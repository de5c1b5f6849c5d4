//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::{CreateQueryRequest, UpdateQueryRequest};
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse, SessionResponse};
