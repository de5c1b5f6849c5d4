//! In-memory implementation of RecommendationRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

use nest_core::entities::{Recommendation, RecommendationFilter};
use nest_core::traits::{RecommendationRepository, RepoResult};
use nest_core::value_objects::{DeleteResult, InsertOneResult, Snowflake};

#[derive(Debug, Clone, Default)]
pub struct MemoryRecommendationRepository {
    documents: Arc<RwLock<BTreeMap<Snowflake, Recommendation>>>,
}

impl MemoryRecommendationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecommendationRepository for MemoryRecommendationRepository {
    #[instrument(skip(self, recommendation), fields(id = %recommendation.id))]
    async fn insert(&self, recommendation: &Recommendation) -> RepoResult<InsertOneResult> {
        self.documents
            .write()
            .insert(recommendation.id, recommendation.clone());
        Ok(InsertOneResult::new(recommendation.id))
    }

    #[instrument(skip(self))]
    async fn find_many(&self, filter: &RecommendationFilter) -> RepoResult<Vec<Recommendation>> {
        // BTreeMap iteration is id order, which is insertion order
        Ok(self
            .documents
            .read()
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<DeleteResult> {
        let removed = self.documents.write().remove(&id);
        Ok(DeleteResult::new(u64::from(removed.is_some())))
    }
}
