//! Query entity - a product boycott inquiry submitted by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Query document
///
/// Every descriptive field is optional: submissions are stored as received.
/// `recommendation_count` changes only through the increment/decrement
/// operations, never through [`QueryFields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(rename = "_id")]
    pub id: Snowflake,
    pub product_name: Option<String>,
    pub product_brand: Option<String>,
    pub product_image: Option<String>,
    pub query_title: Option<String>,
    pub boycotting_reason: Option<String>,
    /// Submitter email
    pub email: Option<String>,
    /// Submitter display name
    pub name: Option<String>,
    /// Submitter photo URL
    pub photo: Option<String>,
    /// Supplied by the caller, not stamped by the server
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recommendation_count: i64,
}

impl Query {
    /// Create an empty query with the given id and a zero counter
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            product_name: None,
            product_brand: None,
            product_image: None,
            query_title: None,
            boycotting_reason: None,
            email: None,
            name: None,
            photo: None,
            created_at: None,
            recommendation_count: 0,
        }
    }

    /// Editable fields as currently stored
    pub fn fields(&self) -> QueryFields {
        QueryFields {
            product_name: self.product_name.clone(),
            product_brand: self.product_brand.clone(),
            product_image: self.product_image.clone(),
            query_title: self.query_title.clone(),
            boycotting_reason: self.boycotting_reason.clone(),
        }
    }

    /// Overwrite the editable fields; returns whether anything changed
    pub fn apply(&mut self, fields: &QueryFields) -> bool {
        if self.fields() == *fields {
            return false;
        }
        self.product_name.clone_from(&fields.product_name);
        self.product_brand.clone_from(&fields.product_brand);
        self.product_image.clone_from(&fields.product_image);
        self.query_title.clone_from(&fields.query_title);
        self.boycotting_reason.clone_from(&fields.boycotting_reason);
        true
    }

    /// Newest-first ordering used by every listing
    ///
    /// Descending `created_at`, records without a timestamp last, then
    /// descending id (insertion order) as the tie-breaker.
    pub fn newest_first(a: &Self, b: &Self) -> std::cmp::Ordering {
        match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
        .then_with(|| b.id.cmp(&a.id))
    }
}

/// The five fields the general update route replaces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFields {
    pub product_name: Option<String>,
    pub product_brand: Option<String>,
    pub product_image: Option<String>,
    pub query_title: Option<String>,
    pub boycotting_reason: Option<String>,
}
