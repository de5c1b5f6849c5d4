//! Request DTOs for API endpoints
//!
//! Nothing is required: every field may be absent and is stored as null.
//! Fields the query schema does not know about are ignored. Descriptive
//! fields accept any JSON scalar and keep its text; objects and arrays are
//! rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use nest_core::entities::{Query, QueryFields};
use nest_core::Snowflake;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /query`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQueryRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_brand: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_image: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub query_title: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub boycotting_reason: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub photo: Option<String>,
    /// RFC 3339, a bare `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` (read as UTC),
    /// or integer epoch milliseconds
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    pub recommendation_count: Option<i64>,
}

impl CreateQueryRequest {
    /// Build the stored document; the counter starts at zero unless the client set one
    pub fn into_query(self, id: Snowflake) -> Query {
        Query {
            id,
            product_name: self.product_name,
            product_brand: self.product_brand,
            product_image: self.product_image,
            query_title: self.query_title,
            boycotting_reason: self.boycotting_reason,
            email: self.email,
            name: self.name,
            photo: self.photo,
            created_at: self.created_at,
            recommendation_count: self.recommendation_count.unwrap_or(0),
        }
    }
}

/// Body of `PUT /query/:id`
///
/// Only the five editable fields are read. `recommendationCount` and `_id`
/// in the body are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQueryRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_brand: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub product_image: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub query_title: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub boycotting_reason: Option<String>,
}

impl From<UpdateQueryRequest> for QueryFields {
    fn from(request: UpdateQueryRequest) -> Self {
        Self {
            product_name: request.product_name,
            product_brand: request.product_brand,
            product_image: request.product_image,
            query_title: request.query_title,
            boycotting_reason: request.boycotting_reason,
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(de::Error::custom("expected a string, number or boolean")),
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("createdAt {n} is not epoch milliseconds"))),
        Value::String(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("createdAt {s:?} is not a recognised date"))),
        _ => Err(de::Error::custom("createdAt must be a date string or epoch milliseconds")),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
