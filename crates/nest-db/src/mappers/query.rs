//! Query entity <-> model mapper

use chrono::{DateTime, Utc};
use nest_core::entities::Query;
use nest_core::value_objects::Snowflake;

use crate::models::QueryModel;

/// Convert QueryModel to Query entity
impl From<QueryModel> for Query {
    fn from(model: QueryModel) -> Self {
        Query {
            id: Snowflake::new(model.id),
            product_name: model.product_name,
            product_brand: model.product_brand,
            product_image: model.product_image,
            query_title: model.query_title,
            boycotting_reason: model.boycotting_reason,
            email: model.email,
            name: model.name,
            photo: model.photo,
            created_at: model.created_at,
            recommendation_count: model.recommendation_count,
        }
    }
}

/// Query values in column order for insertion
pub struct QueryInsert<'a> {
    pub id: i64,
    pub product_name: Option<&'a str>,
    pub product_brand: Option<&'a str>,
    pub product_image: Option<&'a str>,
    pub query_title: Option<&'a str>,
    pub boycotting_reason: Option<&'a str>,
    pub email: Option<&'a str>,
    pub name: Option<&'a str>,
    pub photo: Option<&'a str>,
    pub created_at: Option<DateTime<Utc>>,
    pub recommendation_count: i64,
}

impl<'a> QueryInsert<'a> {
    pub fn new(query: &'a Query) -> Self {
        Self {
            id: query.id.into_inner(),
            product_name: query.product_name.as_deref(),
            product_brand: query.product_brand.as_deref(),
            product_image: query.product_image.as_deref(),
            query_title: query.query_title.as_deref(),
            boycotting_reason: query.boycotting_reason.as_deref(),
            email: query.email.as_deref(),
            name: query.name.as_deref(),
            photo: query.photo.as_deref(),
            created_at: query.created_at,
            recommendation_count: query.recommendation_count,
        }
    }
}

/// Build an `ILIKE ... ESCAPE '\'` pattern matching `needle` anywhere
pub fn escape_like(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
