//! Recommendation handlers
//!
//! Endpoints for the `recommendation` collection.

use axum::{
    extract::{Path, State},
    Json,
};
use nest_core::{DeleteResult, InsertOneResult, NewRecommendation, Recommendation};
use nest_service::RecommendationService;
use tracing::info;

use crate::extractors::{AuthUser, DocumentId, EmailParams, JsonBody, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Store a recommendation as posted
///
/// POST /recommendations (also POST /recommendation)
pub async fn create_recommendation(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    JsonBody(recommendation): JsonBody<NewRecommendation>,
) -> ApiResult<Json<InsertOneResult>> {
    let result = RecommendationService::new(state.service_context())
        .create(recommendation)
        .await?;

    info!(
        recommendation_id = %result.inserted_id,
        submitted_by = auth.as_ref().and_then(AuthUser::email).unwrap_or("anonymous"),
        "Recommendation submitted"
    );

    Ok(Json(result))
}

/// Recommendations written by `email`
///
/// GET /recommendation?email=
pub async fn list_by_recommender(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<EmailParams>,
) -> ApiResult<Json<Vec<Recommendation>>> {
    let recommendations = RecommendationService::new(state.service_context())
        .list_by_recommender(params.email()?)
        .await?;
    Ok(Json(recommendations))
}

/// Recommendations made on queries owned by `email`
///
/// GET /recommendationforme?email=
pub async fn list_for_owner(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<EmailParams>,
) -> ApiResult<Json<Vec<Recommendation>>> {
    let recommendations = RecommendationService::new(state.service_context())
        .list_for_owner(params.email()?)
        .await?;
    Ok(Json(recommendations))
}

/// Every recommendation
///
/// GET /recommendations
pub async fn list_recommendations(State(state): State<AppState>) -> ApiResult<Json<Vec<Recommendation>>> {
    let recommendations = RecommendationService::new(state.service_context())
        .list_all()
        .await?;
    Ok(Json(recommendations))
}

/// Recommendations attached to one query
///
/// The query id is compared as a plain string and is not validated.
///
/// GET /recommendations/:id (also GET /recommendation/:id)
pub async fn list_by_query(
    State(state): State<AppState>,
    Path(query_id): Path<String>,
) -> ApiResult<Json<Vec<Recommendation>>> {
    let recommendations = RecommendationService::new(state.service_context())
        .list_by_query(&query_id)
        .await?;
    Ok(Json(recommendations))
}

/// Delete a recommendation
///
/// DELETE /recommendation/:id
pub async fn delete_recommendation(
    State(state): State<AppState>,
    DocumentId(id): DocumentId,
) -> ApiResult<Json<DeleteResult>> {
    let result = RecommendationService::new(state.service_context())
        .delete(id)
        .await?;
    Ok(Json(result))
}
