//! Recommendation entity - an alternative product suggested for a query

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::Snowflake;

/// Recommendation document
///
/// The three lookup keys are kept exactly as the client sent them, whatever
/// their JSON type. `query_id` is not checked against the query collection
/// and survives deletion of the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "_id")]
    pub id: Snowflake,
    pub query_id: Option<Value>,
    pub recommender_email: Option<Value>,
    /// Email of the query owner, copied for the reverse lookup
    pub user_email: Option<Value>,
    /// Any other fields the client sent, persisted wholesale
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Recommendation as received from the client, before an id is assigned
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub query_id: Option<Value>,
    pub recommender_email: Option<Value>,
    pub user_email: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewRecommendation {
    /// Attach the store-assigned id
    ///
    /// A client-supplied `_id` is discarded so the document carries exactly one.
    pub fn into_recommendation(self, id: Snowflake) -> Recommendation {
        let mut fields = self.fields;
        fields.remove("_id");

        Recommendation {
            id,
            query_id: self.query_id,
            recommender_email: self.recommender_email,
            user_email: self.user_email,
            fields,
        }
    }
}

/// Equality filter for `RecommendationRepository::find_many`
///
/// Filter values arrive as strings, so only string-valued keys can match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationFilter {
    All,
    Recommender(String),
    Owner(String),
    Query(String),
}

impl RecommendationFilter {
    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        let field = match self {
            Self::All => return true,
            Self::Recommender(_) => recommendation.recommender_email.as_ref(),
            Self::Owner(_) => recommendation.user_email.as_ref(),
            Self::Query(_) => recommendation.query_id.as_ref(),
        };
        field.and_then(Value::as_str) == self.value()
    }

    /// The value compared against, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Recommender(v) | Self::Owner(v) | Self::Query(v) => Some(v),
        }
    }
}
