//! Query service
//!
//! CRUD over the query collection plus the recommendation counter.

use nest_core::entities::{Query, QueryFields};
use nest_core::value_objects::{DeleteResult, InsertOneResult, QueryListing, UpdateResult};
use nest_core::Snowflake;
use tracing::{debug, info, instrument};

use crate::dto::{CreateQueryRequest, UpdateQueryRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Query service
pub struct QueryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QueryService<'a> {
    /// Create a new QueryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a new query
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateQueryRequest) -> ServiceResult<InsertOneResult> {
        let query = request.into_query(self.ctx.generate_id());
        let result = self.ctx.query_repo().insert(&query).await?;

        info!(query_id = %query.id, "Query created");

        Ok(result)
    }

    /// Filtered, sorted and windowed listing
    #[instrument(skip(self))]
    pub async fn list(&self, listing: QueryListing) -> ServiceResult<Vec<Query>> {
        let queries = self.ctx.query_repo().find_many(&listing).await?;
        debug!(returned = queries.len(), "Queries listed");
        Ok(queries)
    }

    /// Newest queries for the home page; `None` or zero means the default of six
    #[instrument(skip(self))]
    pub async fn list_recent(&self, limit: Option<u64>) -> ServiceResult<Vec<Query>> {
        Ok(self
            .ctx
            .query_repo()
            .find_many(&QueryListing::recent(limit))
            .await?)
    }

    /// Approximate number of stored queries
    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<u64> {
        Ok(self.ctx.query_repo().estimated_count().await?)
    }

    /// Look a query up; a missing id is `None`, not an error
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<Option<Query>> {
        Ok(self.ctx.query_repo().find_by_id(id).await?)
    }

    /// Overwrite the five editable fields; absent fields become null
    ///
    /// An unknown id matches nothing and nothing is created.
    #[instrument(skip(self, request))]
    pub async fn replace_fields(&self, id: Snowflake, request: UpdateQueryRequest) -> ServiceResult<UpdateResult> {
        let fields = QueryFields::from(request);
        let result = self.ctx.query_repo().update_fields(id, &fields).await?;

        info!(
            query_id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Query fields replaced"
        );

        Ok(result)
    }

    /// Add one to `recommendationCount`
    #[instrument(skip(self))]
    pub async fn increment(&self, id: Snowflake) -> ServiceResult<UpdateResult> {
        Ok(self.ctx.query_repo().adjust_recommendation_count(id, 1).await?)
    }

    /// Subtract one from `recommendationCount`, going negative if need be
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: Snowflake) -> ServiceResult<UpdateResult> {
        Ok(self.ctx.query_repo().adjust_recommendation_count(id, -1).await?)
    }

    /// Delete a query; its recommendations stay
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Snowflake) -> ServiceResult<DeleteResult> {
        let result = self.ctx.query_repo().delete(id).await?;
        info!(query_id = %id, deleted = result.deleted_count, "Query deleted");
        Ok(result)
    }
}
