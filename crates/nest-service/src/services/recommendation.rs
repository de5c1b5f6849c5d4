//! Recommendation service

use nest_core::entities::{NewRecommendation, Recommendation, RecommendationFilter};
use nest_core::value_objects::{DeleteResult, InsertOneResult};
use nest_core::Snowflake;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Recommendation service
pub struct RecommendationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecommendationService<'a> {
    /// Create a new RecommendationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a recommendation exactly as sent
    ///
    /// `queryId` is not checked against the query collection.
    #[instrument(skip(self, recommendation))]
    pub async fn create(&self, recommendation: NewRecommendation) -> ServiceResult<InsertOneResult> {
        let recommendation = recommendation.into_recommendation(self.ctx.generate_id());
        let result = self.ctx.recommendation_repo().insert(&recommendation).await?;

        info!(
            recommendation_id = %recommendation.id,
            query_id = ?recommendation.query_id,
            "Recommendation created"
        );

        Ok(result)
    }

    /// Recommendations written by `email`
    #[instrument(skip(self))]
    pub async fn list_by_recommender(&self, email: &str) -> ServiceResult<Vec<Recommendation>> {
        self.find(RecommendationFilter::Recommender(email.to_string())).await
    }

    /// Recommendations on queries owned by `email`
    #[instrument(skip(self))]
    pub async fn list_for_owner(&self, email: &str) -> ServiceResult<Vec<Recommendation>> {
        self.find(RecommendationFilter::Owner(email.to_string())).await
    }

    /// Recommendations whose `queryId` equals `query_id`
    #[instrument(skip(self))]
    pub async fn list_by_query(&self, query_id: &str) -> ServiceResult<Vec<Recommendation>> {
        self.find(RecommendationFilter::Query(query_id.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<Recommendation>> {
        self.find(RecommendationFilter::All).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Snowflake) -> ServiceResult<DeleteResult> {
        let result = self.ctx.recommendation_repo().delete(id).await?;
        info!(recommendation_id = %id, deleted = result.deleted_count, "Recommendation deleted");
        Ok(result)
    }

    async fn find(&self, filter: RecommendationFilter) -> ServiceResult<Vec<Recommendation>> {
        Ok(self.ctx.recommendation_repo().find_many(&filter).await?)
    }
}
