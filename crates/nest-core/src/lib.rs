//! # nest-core
//!
//! Domain layer containing entities, value objects and the document store traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewRecommendation, Query, QueryFields, Recommendation, RecommendationFilter};
pub use error::DomainError;
pub use traits::{HealthProbe, QueryRepository, RecommendationRepository, RepoResult};
pub use value_objects::{
    DeleteResult, InsertOneResult, QueryListing, Snowflake, SnowflakeGenerator,
    SnowflakeParseError, UpdateResult, WorkerIdOutOfRange, DEFAULT_RECENT_LIMIT, MAX_WORKER_ID,
};
