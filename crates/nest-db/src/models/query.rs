//! Query database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the queries table
#[derive(Debug, Clone, FromRow)]
pub struct QueryModel {
    pub id: i64,
    pub product_name: Option<String>,
    pub product_brand: Option<String>,
    pub product_image: Option<String>,
    pub query_title: Option<String>,
    pub boycotting_reason: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub recommendation_count: i64,
}

/// Matched/modified tally returned by the field replacement statement
#[derive(Debug, Clone, Copy, FromRow)]
pub struct UpdateCountsModel {
    pub matched: i64,
    pub modified: i64,
}
