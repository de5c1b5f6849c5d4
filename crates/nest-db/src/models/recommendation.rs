//! Recommendation database model

use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the recommendations table
#[derive(Debug, Clone, FromRow)]
pub struct RecommendationModel {
    pub id: i64,
    pub query_id: Option<Json<Value>>,
    pub recommender_email: Option<Json<Value>>,
    pub user_email: Option<Json<Value>>,
    pub body: Json<Map<String, Value>>,
}
