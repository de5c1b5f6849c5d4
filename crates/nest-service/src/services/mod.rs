//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and perform one store call per
//! operation.

pub mod auth;
pub mod context;
pub mod error;
pub mod query;
pub mod recommendation;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use query::QueryService;
pub use recommendation::RecommendationService;
