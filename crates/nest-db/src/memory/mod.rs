//! In-memory store adapters
//!
//! Same semantics as the PostgreSQL adapters, kept in process behind
//! `parking_lot` locks. Used by `STORE_BACKEND=memory` and by tests.
//! Every operation takes the lock once, so increments are atomic.

mod query;
mod recommendation;

pub use query::MemoryQueryRepository;
pub use recommendation::MemoryRecommendationRepository;

use async_trait::async_trait;
use nest_core::traits::{HealthProbe, RepoResult};

/// The in-memory store is always reachable
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHealthProbe;

#[async_trait]
impl HealthProbe for MemoryHealthProbe {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
