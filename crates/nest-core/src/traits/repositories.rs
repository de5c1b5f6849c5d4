//! Store traits (ports) - the document store adapter interface
//!
//! Each collection gets its own trait. Every method is a single round trip to
//! the store: there are no transactions and no multi-document operations.

use async_trait::async_trait;

use crate::entities::{Query, QueryFields, Recommendation, RecommendationFilter};
use crate::error::DomainError;
use crate::value_objects::{DeleteResult, InsertOneResult, QueryListing, Snowflake, UpdateResult};

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Query Repository
// ============================================================================

#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// Insert a new query document
    async fn insert(&self, query: &Query) -> RepoResult<InsertOneResult>;

    /// Filter, sort and window queries as described by `listing`
    async fn find_many(&self, listing: &QueryListing) -> RepoResult<Vec<Query>>;

    /// Find a query by id
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Query>>;

    /// Replace the editable fields of one query, without upsert
    async fn update_fields(&self, id: Snowflake, fields: &QueryFields) -> RepoResult<UpdateResult>;

    /// Atomically add `delta` to `recommendationCount`; no floor is applied
    async fn adjust_recommendation_count(&self, id: Snowflake, delta: i64) -> RepoResult<UpdateResult>;

    /// Delete one query; recommendations pointing at it are left alone
    async fn delete(&self, id: Snowflake) -> RepoResult<DeleteResult>;

    /// Approximate document count, possibly stale
    async fn estimated_count(&self) -> RepoResult<u64>;
}

// ============================================================================
// Recommendation Repository
// ============================================================================

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Insert a new recommendation document
    async fn insert(&self, recommendation: &Recommendation) -> RepoResult<InsertOneResult>;

    /// All recommendations matching `filter`, in insertion order
    async fn find_many(&self, filter: &RecommendationFilter) -> RepoResult<Vec<Recommendation>>;

    /// Delete one recommendation
    async fn delete(&self, id: Snowflake) -> RepoResult<DeleteResult>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Cheap round trip proving the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
