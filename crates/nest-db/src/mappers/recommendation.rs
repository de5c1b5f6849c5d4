//! Recommendation entity <-> model mapper

use nest_core::entities::{Recommendation, RecommendationFilter};
use nest_core::value_objects::Snowflake;
use serde_json::{Map, Value};
use sqlx::types::Json;

use crate::models::RecommendationModel;

/// Convert RecommendationModel to Recommendation entity
impl From<RecommendationModel> for Recommendation {
    fn from(model: RecommendationModel) -> Self {
        Recommendation {
            id: Snowflake::new(model.id),
            query_id: model.query_id.map(|v| v.0),
            recommender_email: model.recommender_email.map(|v| v.0),
            user_email: model.user_email.map(|v| v.0),
            fields: model.body.0,
        }
    }
}

/// Recommendation values for insertion
///
/// The lookup keys are JSONB columns so any JSON value survives; the
/// remaining free-form fields go to the body.
pub struct RecommendationInsert<'a> {
    pub id: i64,
    pub query_id: Option<Json<&'a Value>>,
    pub recommender_email: Option<Json<&'a Value>>,
    pub user_email: Option<Json<&'a Value>>,
    pub body: Json<&'a Map<String, Value>>,
}

impl<'a> RecommendationInsert<'a> {
    pub fn new(recommendation: &'a Recommendation) -> Self {
        Self {
            id: recommendation.id.into_inner(),
            query_id: recommendation.query_id.as_ref().map(Json),
            recommender_email: recommendation.recommender_email.as_ref().map(Json),
            user_email: recommendation.user_email.as_ref().map(Json),
            body: Json(&recommendation.fields),
        }
    }
}

/// Column compared by an equality filter
///
/// The column holds JSONB, so the bound string is compared as `to_jsonb($1::text)`.
pub fn filter_column(filter: &RecommendationFilter) -> Option<&'static str> {
    match filter {
        RecommendationFilter::All => None,
        RecommendationFilter::Recommender(_) => Some("recommender_email"),
        RecommendationFilter::Owner(_) => Some("user_email"),
        RecommendationFilter::Query(_) => Some("query_id"),
    }
}
