//! PostgreSQL implementation of RecommendationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use nest_core::entities::{Recommendation, RecommendationFilter};
use nest_core::traits::{RecommendationRepository, RepoResult};
use nest_core::value_objects::{DeleteResult, InsertOneResult, Snowflake};

use crate::mappers::{filter_column, RecommendationInsert};
use crate::models::RecommendationModel;

use super::error::map_db_error;

const SELECT_RECOMMENDATIONS: &str =
    "SELECT id, query_id, recommender_email, user_email, body FROM recommendations";

/// PostgreSQL implementation of RecommendationRepository
#[derive(Clone)]
pub struct PgRecommendationRepository {
    pool: PgPool,
}

impl PgRecommendationRepository {
    /// Create a new PgRecommendationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationRepository for PgRecommendationRepository {
    #[instrument(skip(self, recommendation), fields(id = %recommendation.id))]
    async fn insert(&self, recommendation: &Recommendation) -> RepoResult<InsertOneResult> {
        let row = RecommendationInsert::new(recommendation);

        sqlx::query(
            r#"
            INSERT INTO recommendations (id, query_id, recommender_email, user_email, body)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(row.id)
        .bind(row.query_id)
        .bind(row.recommender_email)
        .bind(row.user_email)
        .bind(row.body)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(InsertOneResult::new(recommendation.id))
    }

    #[instrument(skip(self))]
    async fn find_many(&self, filter: &RecommendationFilter) -> RepoResult<Vec<Recommendation>> {
        let results = match (filter_column(filter), filter.value()) {
            (Some(column), Some(value)) => {
                let sql = format!("{SELECT_RECOMMENDATIONS} WHERE {column} = to_jsonb($1::text) ORDER BY id ASC");
                sqlx::query_as::<_, RecommendationModel>(&sql)
                    .bind(value)
                    .fetch_all(&self.pool)
                    .await
            }
            _ => {
                let sql = format!("{SELECT_RECOMMENDATIONS} ORDER BY id ASC");
                sqlx::query_as::<_, RecommendationModel>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Recommendation::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<DeleteResult> {
        let result = sqlx::query("DELETE FROM recommendations WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
