//! In-memory implementation of QueryRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

use nest_core::entities::{Query, QueryFields};
use nest_core::error::DomainError;
use nest_core::traits::{QueryRepository, RepoResult};
use nest_core::value_objects::{DeleteResult, InsertOneResult, QueryListing, Snowflake, UpdateResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryQueryRepository {
    documents: Arc<RwLock<BTreeMap<Snowflake, Query>>>,
}

impl MemoryQueryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueryRepository for MemoryQueryRepository {
    #[instrument(skip(self, query), fields(id = %query.id))]
    async fn insert(&self, query: &Query) -> RepoResult<InsertOneResult> {
        self.documents.write().insert(query.id, query.clone());
        Ok(InsertOneResult::new(query.id))
    }

    #[instrument(skip(self))]
    async fn find_many(&self, listing: &QueryListing) -> RepoResult<Vec<Query>> {
        let mut matched: Vec<Query> = self
            .documents
            .read()
            .values()
            .filter(|q| listing.matches(q.product_name.as_deref()))
            .cloned()
            .collect();

        matched.sort_by(Query::newest_first);

        let skip = usize::try_from(listing.skip).unwrap_or(usize::MAX);
        let limit = listing
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(matched.into_iter().skip(skip).take(limit).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Query>> {
        Ok(self.documents.read().get(&id).cloned())
    }

    #[instrument(skip(self, fields))]
    async fn update_fields(&self, id: Snowflake, fields: &QueryFields) -> RepoResult<UpdateResult> {
        let mut documents = self.documents.write();
        let Some(query) = documents.get_mut(&id) else {
            return Ok(UpdateResult::unmatched());
        };

        let modified = u64::from(query.apply(fields));
        Ok(UpdateResult::new(1, modified))
    }

    #[instrument(skip(self))]
    async fn adjust_recommendation_count(&self, id: Snowflake, delta: i64) -> RepoResult<UpdateResult> {
        let mut documents = self.documents.write();
        let Some(query) = documents.get_mut(&id) else {
            return Ok(UpdateResult::unmatched());
        };

        query.recommendation_count = query
            .recommendation_count
            .checked_add(delta)
            .ok_or_else(|| DomainError::ValidationError("recommendationCount out of range".into()))?;
        Ok(UpdateResult::new(1, u64::from(delta != 0)))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<DeleteResult> {
        let removed = self.documents.write().remove(&id);
        Ok(DeleteResult::new(u64::from(removed.is_some())))
    }

    async fn estimated_count(&self) -> RepoResult<u64> {
        Ok(self.documents.read().len() as u64)
    }
}
