//! PostgreSQL implementation of QueryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use nest_core::entities::{Query, QueryFields};
use nest_core::traits::{QueryRepository, RepoResult};
use nest_core::value_objects::{DeleteResult, InsertOneResult, QueryListing, Snowflake, UpdateResult};

use crate::mappers::{escape_like, QueryInsert};
use crate::models::{QueryModel, UpdateCountsModel};

use super::error::map_db_error;

/// PostgreSQL implementation of QueryRepository
#[derive(Clone)]
pub struct PgQueryRepository {
    pool: PgPool,
}

impl PgQueryRepository {
    /// Create a new PgQueryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exact_count(&self) -> RepoResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM queries")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl QueryRepository for PgQueryRepository {
    #[instrument(skip(self, query), fields(id = %query.id))]
    async fn insert(&self, query: &Query) -> RepoResult<InsertOneResult> {
        let row = QueryInsert::new(query);

        sqlx::query(
            r#"
            INSERT INTO queries (id, product_name, product_brand, product_image, query_title,
                                 boycotting_reason, email, name, photo, created_at,
                                 recommendation_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(row.id)
        .bind(row.product_name)
        .bind(row.product_brand)
        .bind(row.product_image)
        .bind(row.query_title)
        .bind(row.boycotting_reason)
        .bind(row.email)
        .bind(row.name)
        .bind(row.photo)
        .bind(row.created_at)
        .bind(row.recommendation_count)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(InsertOneResult::new(query.id))
    }

    #[instrument(skip(self))]
    async fn find_many(&self, listing: &QueryListing) -> RepoResult<Vec<Query>> {
        let pattern = listing.search.as_deref().map(escape_like);
        let skip = i64::try_from(listing.skip).unwrap_or(i64::MAX);
        let limit = listing.limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX));

        let results = sqlx::query_as::<_, QueryModel>(
            r#"
            SELECT id, product_name, product_brand, product_image, query_title,
                   boycotting_reason, email, name, photo, created_at, recommendation_count
            FROM queries
            WHERE $1::text IS NULL OR product_name ILIKE $1 ESCAPE '\'
            ORDER BY created_at DESC NULLS LAST, id DESC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(pattern)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Query::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Query>> {
        let result = sqlx::query_as::<_, QueryModel>(
            r#"
            SELECT id, product_name, product_brand, product_image, query_title,
                   boycotting_reason, email, name, photo, created_at, recommendation_count
            FROM queries
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Query::from))
    }

    #[instrument(skip(self, fields))]
    async fn update_fields(&self, id: Snowflake, fields: &QueryFields) -> RepoResult<UpdateResult> {
        // A row whose fields already hold the new values counts as matched but not modified
        let counts = sqlx::query_as::<_, UpdateCountsModel>(
            r#"
            WITH target AS (
                SELECT id, product_name, product_brand, product_image, query_title, boycotting_reason
                FROM queries
                WHERE id = $1
                FOR UPDATE
            ),
            changed AS (
                UPDATE queries q
                SET product_name = $2,
                    product_brand = $3,
                    product_image = $4,
                    query_title = $5,
                    boycotting_reason = $6
                FROM target t
                WHERE q.id = t.id
                  AND (t.product_name IS DISTINCT FROM $2
                       OR t.product_brand IS DISTINCT FROM $3
                       OR t.product_image IS DISTINCT FROM $4
                       OR t.query_title IS DISTINCT FROM $5
                       OR t.boycotting_reason IS DISTINCT FROM $6)
                RETURNING q.id
            )
            SELECT (SELECT COUNT(*) FROM target) AS matched,
                   (SELECT COUNT(*) FROM changed) AS modified
            "#,
        )
        .bind(id.into_inner())
        .bind(fields.product_name.as_deref())
        .bind(fields.product_brand.as_deref())
        .bind(fields.product_image.as_deref())
        .bind(fields.query_title.as_deref())
        .bind(fields.boycotting_reason.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(UpdateResult::new(
            counts.matched.max(0) as u64,
            counts.modified.max(0) as u64,
        ))
    }

    #[instrument(skip(self))]
    async fn adjust_recommendation_count(&self, id: Snowflake, delta: i64) -> RepoResult<UpdateResult> {
        let result = sqlx::query(
            r#"
            UPDATE queries
            SET recommendation_count = recommendation_count + $2
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(delta)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let affected = result.rows_affected();
        Ok(UpdateResult::new(affected, affected))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<DeleteResult> {
        let result = sqlx::query("DELETE FROM queries WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    #[instrument(skip(self))]
    async fn estimated_count(&self) -> RepoResult<u64> {
        let (estimate,): (i64,) = sqlx::query_as(
            r#"
            SELECT reltuples::bigint
            FROM pg_class
            WHERE oid = 'queries'::regclass
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        // reltuples is -1 until the table is first vacuumed or analyzed
        if estimate < 0 {
            return self.exact_count().await;
        }

        Ok(estimate as u64)
    }
}
