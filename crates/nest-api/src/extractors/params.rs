//! Query string extractors
//!
//! Values are taken as strings and converted here so that every malformed
//! parameter is reported as `INVALID_QUERY_PARAMETER`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use nest_core::QueryListing;
use serde::{de::DeserializeOwned, Deserialize};

use crate::response::ApiError;

/// Query string extractor whose rejections render as `INVALID_QUERY_PARAMETER`
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(QueryParams(params))
    }
}

/// Raw `GET /query` parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl TryFrom<ListParams> for QueryListing {
    type Error = ApiError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let page = parse_count("page", params.page.as_deref())?;
        let size = parse_count("size", params.size.as_deref())?;

        Ok(QueryListing::paged(params.search, page, size))
    }
}

/// Blank counts are treated as absent; anything else must be a non-negative integer
fn parse_count(name: &str, raw: Option<&str>) -> Result<Option<u64>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ApiError::invalid_query(format!("'{name}' must be a non-negative integer"))),
    }
}

/// `GET /queryhome` parameters
///
/// Parsing is lenient: a missing, non-numeric or non-positive `limit` falls
/// back to the default preview size.
#[derive(Debug, Default, Deserialize)]
pub struct RecentParams {
    #[serde(default)]
    pub limit: Option<String>,
}

impl RecentParams {
    pub fn limit(&self) -> Option<u64> {
        self.limit
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(|n| u64::try_from(n).ok())
            .filter(|n| *n > 0)
    }
}

/// `?email=` parameter of the recommendation lookups
#[derive(Debug, Default, Deserialize)]
pub struct EmailParams {
    #[serde(default)]
    pub email: Option<String>,
}

impl EmailParams {
    /// The email to match, required and non-empty
    ///
    /// # Errors
    /// `INVALID_QUERY_PARAMETER` when `email` is missing or blank
    pub fn email(&self) -> Result<&str, ApiError> {
        self.email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ApiError::invalid_query("'email' is required"))
    }
}
