//! Listing options for the query collection
//!
//! Every store adapter applies the same rules:
//! - filter: case-insensitive substring match on `productName` when `search` is set
//! - sort: `createdAt` descending, missing timestamps last, newest id first on ties
//! - window: `skip` records dropped, then at most `limit` returned (`None` = unbounded)

/// Number of queries shown on the home page preview
pub const DEFAULT_RECENT_LIMIT: u64 = 6;

/// Filter, sort and window for `QueryRepository::find_many`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryListing {
    /// Substring to look for in `productName`; never empty
    pub search: Option<String>,
    pub skip: u64,
    pub limit: Option<u64>,
}

impl QueryListing {
    /// Unfiltered, unbounded listing
    pub fn all() -> Self {
        Self::default()
    }

    /// Listing for a page/size pair as sent by the client
    ///
    /// A missing page is the first page; a missing or zero size means no limit.
    pub fn paged(search: Option<String>, page: Option<u64>, size: Option<u64>) -> Self {
        let limit = size.filter(|s| *s > 0);
        let skip = match limit {
            Some(size) => page.unwrap_or(0).saturating_mul(size),
            None => 0,
        };

        Self {
            search: search.filter(|s| !s.trim().is_empty()),
            skip,
            limit,
        }
    }

    /// Newest `limit` queries for the home page
    pub fn recent(limit: Option<u64>) -> Self {
        Self {
            search: None,
            skip: 0,
            limit: Some(limit.filter(|l| *l > 0).unwrap_or(DEFAULT_RECENT_LIMIT)),
        }
    }

    /// Whether `product_name` passes the search filter
    pub fn matches(&self, product_name: Option<&str>) -> bool {
        match (&self.search, product_name) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(needle), Some(name)) => name.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}
