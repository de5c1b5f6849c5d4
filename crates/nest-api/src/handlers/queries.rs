//! Query handlers
//!
//! Endpoints for the `query` collection. Every endpoint answers 200 with the
//! store's own result; a write that matched nothing still succeeds with zero
//! counts.

use axum::{extract::State, Json};
use nest_core::{DeleteResult, InsertOneResult, Query, QueryListing, UpdateResult};
use nest_service::{
    dto::{CreateQueryRequest, UpdateQueryRequest},
    QueryService,
};
use tracing::info;

use crate::extractors::{AuthUser, DocumentId, JsonBody, ListParams, QueryParams, RecentParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create a query
///
/// POST /query
pub async fn create_query(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    JsonBody(request): JsonBody<CreateQueryRequest>,
) -> ApiResult<Json<InsertOneResult>> {
    let result = QueryService::new(state.service_context()).create(request).await?;

    info!(
        query_id = %result.inserted_id,
        submitted_by = auth.as_ref().and_then(AuthUser::email).unwrap_or("anonymous"),
        "Query submitted"
    );

    Ok(Json(result))
}

/// List queries, optionally searched and paged
///
/// GET /query?search=&page=&size=
pub async fn list_queries(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> ApiResult<Json<Vec<Query>>> {
    let listing = QueryListing::try_from(params)?;
    let queries = QueryService::new(state.service_context()).list(listing).await?;
    Ok(Json(queries))
}

/// Newest queries for the home page
///
/// GET /queryhome?limit=
pub async fn recent_queries(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<RecentParams>,
) -> ApiResult<Json<Vec<Query>>> {
    let queries = QueryService::new(state.service_context())
        .list_recent(params.limit())
        .await?;
    Ok(Json(queries))
}

/// Estimated number of queries
///
/// GET /queryCount
pub async fn count_queries(State(state): State<AppState>) -> ApiResult<Json<u64>> {
    let count = QueryService::new(state.service_context()).count().await?;
    Ok(Json(count))
}

/// Get one query; `null` when it does not exist
///
/// GET /query/:id
pub async fn get_query(
    State(state): State<AppState>,
    DocumentId(id): DocumentId,
) -> ApiResult<Json<Option<Query>>> {
    let query = QueryService::new(state.service_context()).get(id).await?;
    Ok(Json(query))
}

/// Replace the editable fields of a query
///
/// PUT /query/:id
pub async fn replace_query(
    State(state): State<AppState>,
    DocumentId(id): DocumentId,
    JsonBody(request): JsonBody<UpdateQueryRequest>,
) -> ApiResult<Json<UpdateResult>> {
    let result = QueryService::new(state.service_context())
        .replace_fields(id, request)
        .await?;
    Ok(Json(result))
}

/// Add one to `recommendationCount`
///
/// PATCH /query/:id/increment
pub async fn increment_count(
    State(state): State<AppState>,
    DocumentId(id): DocumentId,
) -> ApiResult<Json<UpdateResult>> {
    let result = QueryService::new(state.service_context()).increment(id).await?;
    Ok(Json(result))
}

/// Subtract one from `recommendationCount`
///
/// PATCH /query/:id/decrement
pub async fn decrement_count(
    State(state): State<AppState>,
    DocumentId(id): DocumentId,
) -> ApiResult<Json<UpdateResult>> {
    let result = QueryService::new(state.service_context()).decrement(id).await?;
    Ok(Json(result))
}

/// Delete a query
///
/// DELETE /query/:id
pub async fn delete_query(
    State(state): State<AppState>,
    DocumentId(id): DocumentId,
) -> ApiResult<Json<DeleteResult>> {
    let result = QueryService::new(state.service_context()).delete(id).await?;
    Ok(Json(result))
}
